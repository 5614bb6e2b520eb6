// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_admin;
mod postgres_category;
mod postgres_customer;
mod postgres_enquiry;
mod postgres_join_request;
mod postgres_location;
mod slugs;

pub use error::{map_delete_sqlx, map_sqlx};
pub use postgres_admin::PostgresAdminRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_customer::PostgresCustomerRepository;
pub use postgres_enquiry::PostgresEnquiryRepository;
pub use postgres_join_request::PostgresJoinRequestRepository;
pub use postgres_location::PostgresLocationRepository;

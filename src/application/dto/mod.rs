// src/application/dto/mod.rs
pub mod auth;
pub mod categories;
pub mod customers;
pub mod enquiries;
pub mod join_requests;
pub mod locations;
pub mod maintenance;

pub use auth::{AuthTokenDto, AuthenticatedAdmin, TokenSubject};
pub use categories::CategoryDto;
pub use customers::CustomerDto;
pub use enquiries::{EnquiryDto, ShopSummaryDto};
pub use join_requests::JoinRequestDto;
pub use locations::LocationDto;
pub use maintenance::{BackfillFailureDto, BackfillReportDto};

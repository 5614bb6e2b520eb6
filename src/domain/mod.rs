// src/domain/mod.rs
pub mod admin;
pub mod category;
pub mod customer;
pub mod enquiry;
pub mod errors;
pub mod join_request;
pub mod location;
pub mod slug;

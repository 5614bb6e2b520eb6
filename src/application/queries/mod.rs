pub mod categories;
pub mod customers;
pub mod enquiries;
pub mod join_requests;
pub mod locations;

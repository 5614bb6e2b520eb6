// src/application/commands/customers/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod uploads;

pub use create::CreateCustomerCommand;
pub use delete::DeleteCustomerCommand;
pub use service::CustomerCommandService;
pub use update::UpdateCustomerCommand;
pub use uploads::{CustomerUploads, parse_joined_at};

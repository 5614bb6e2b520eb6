mod create;
mod delete;
mod service;
mod update;

pub use create::CreateLocationCommand;
pub use delete::DeleteLocationCommand;
pub use service::LocationCommandService;
pub use update::UpdateLocationCommand;

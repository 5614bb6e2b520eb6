pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Location, LocationUpdate, NewLocation};
pub use repository::LocationRepository;
pub use value_objects::{LocationId, LocationName};

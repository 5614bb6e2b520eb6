pub mod entity;
pub mod photos;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Customer, CustomerFilter, CustomerPhotos, CustomerProfile, CustomerProfilePatch,
    CustomerUpdate, NewCustomer,
};
pub use photos::PhotoGroup;
pub use repository::CustomerRepository;
pub use value_objects::{CustomerId, ShopName};

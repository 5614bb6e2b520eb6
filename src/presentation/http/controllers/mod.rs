// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod categories;
pub mod customers;
pub mod enquiries;
pub mod join_requests;
pub mod locations;
pub mod maintenance;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

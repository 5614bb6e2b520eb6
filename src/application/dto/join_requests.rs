use crate::domain::join_request::JoinRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub id: i64,
    pub shop_name: String,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JoinRequest> for JoinRequestDto {
    fn from(request: JoinRequest) -> Self {
        Self {
            id: request.id.0,
            shop_name: request.shop_name.into(),
            owner_name: request.owner_name,
            phone: request.phone,
            email: request.email,
            category: request.category,
            location: request.location,
            message: request.message,
            created_at: request.created_at,
        }
    }
}

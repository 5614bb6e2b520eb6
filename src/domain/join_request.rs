// src/domain/join_request.rs
use crate::domain::customer::ShopName;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinRequestId(pub i64);

impl JoinRequestId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "join request id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

/// A prospective shop asking to be listed. Category and location are free
/// text because the requester may name ones that do not exist yet.
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub id: JoinRequestId,
    pub shop_name: ShopName,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJoinRequest {
    pub shop_name: ShopName,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait JoinRequestRepository: Send + Sync {
    async fn insert(&self, request: NewJoinRequest) -> DomainResult<JoinRequest>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<JoinRequest>>;
    async fn delete(&self, id: JoinRequestId) -> DomainResult<()>;
}

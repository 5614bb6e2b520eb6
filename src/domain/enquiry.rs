// src/domain/enquiry.rs
use crate::domain::customer::CustomerId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnquiryId(pub i64);

impl EnquiryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("enquiry id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

/// A visitor's message addressed to one shop.
#[derive(Debug, Clone)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub shop_id: CustomerId,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub enquiry: Option<String>,
    pub referred_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEnquiry {
    pub shop_id: CustomerId,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub enquiry: Option<String>,
    pub referred_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry>;
    async fn list(&self) -> DomainResult<Vec<Enquiry>>;
    /// Removes every enquiry and returns how many were deleted.
    async fn delete_all(&self) -> DomainResult<u64>;
}

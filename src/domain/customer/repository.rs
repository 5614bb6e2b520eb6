use crate::domain::customer::entity::{Customer, CustomerFilter, CustomerUpdate, NewCustomer};
use crate::domain::customer::value_objects::CustomerId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, customer: NewCustomer) -> DomainResult<Customer>;
    /// Writes only the fields `update` supplies, leaving every other column
    /// as stored; `NotFound` when the row is gone.
    async fn update(&self, update: CustomerUpdate) -> DomainResult<Customer>;
    async fn delete(&self, id: CustomerId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Customer>>;
    /// Newest first.
    async fn list(&self, filter: &CustomerFilter) -> DomainResult<Vec<Customer>>;
}

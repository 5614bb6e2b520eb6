use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::location::LocationId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Fails with `NotFound` when the row vanished.
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Fails with `NotFound` when missing and `Conflict` while shops still reference it.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_name(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// All categories ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    /// Categories referenced by at least one shop, ordered by name.
    async fn list_in_use(&self) -> DomainResult<Vec<Category>>;
    /// Distinct categories of the shops in `location`, ordered by name.
    async fn list_by_location(&self, location: LocationId) -> DomainResult<Vec<Category>>;
}

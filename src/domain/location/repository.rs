use crate::domain::errors::DomainResult;
use crate::domain::location::entity::{Location, LocationUpdate, NewLocation};
use crate::domain::location::value_objects::{LocationId, LocationName};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn insert(&self, location: NewLocation) -> DomainResult<Location>;
    async fn update(&self, update: LocationUpdate) -> DomainResult<Location>;
    async fn delete(&self, id: LocationId) -> DomainResult<()>;
    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>>;
    async fn find_by_name(
        &self,
        name: &LocationName,
        exclude: Option<LocationId>,
    ) -> DomainResult<Option<Location>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Location>>;
    async fn list(&self) -> DomainResult<Vec<Location>>;
}

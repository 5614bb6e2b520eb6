// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{Slug, SlugScope};
use async_trait::async_trait;

/// A record found without a slug, with the text its slug derives from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSlug {
    pub id: i64,
    pub source_text: Option<String>,
}

/// Slug access to one entity collection.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    fn scope(&self) -> SlugScope;

    /// Whether any record other than `exclude_id` holds `slug`.
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool>;

    /// Every record whose slug is missing. The whole set is fetched at once.
    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>>;

    /// Writes only the slug column of record `id`.
    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()>;
}

// src/domain/slug/services.rs
use std::future::Future;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::value_objects::{Slug, SlugScope};

/// Upper bound on write attempts when the store keeps reporting slug conflicts.
pub const MAX_SLUG_WRITE_ATTEMPTS: usize = 5;

/// Domain service producing slugs that are unique within one collection.
///
/// The probe in [`generate_unique_slug`](Self::generate_unique_slug) is a
/// read-then-write sequence and can race with a concurrent writer choosing the
/// same base. Every slug-bearing write therefore goes through
/// [`write_with_unique_slug`](Self::write_with_unique_slug), which relies on the
/// store's uniqueness constraint and retries with a fresh slug on conflict.
pub struct UniqueSlugService {
    repo: Arc<dyn SlugRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(repo: Arc<dyn SlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub fn scope(&self) -> SlugScope {
        self.repo.scope()
    }

    pub(crate) fn repository(&self) -> &dyn SlugRepository {
        self.repo.as_ref()
    }

    /// Normalized form of `text`, or the scope's default word when nothing survives.
    pub fn base_slug(&self, text: Option<&str>) -> String {
        let normalized = text
            .map(|value| self.generator.slugify(value))
            .unwrap_or_default();
        if normalized.is_empty() {
            self.scope().default_base().to_string()
        } else {
            normalized
        }
    }

    pub async fn generate_unique_slug(
        &self,
        text: Option<&str>,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.base_slug(text);
        let mut candidate = Slug::new(base.clone())?;
        let mut counter = 1u64;

        while self.repo.slug_exists(&candidate, exclude_id).await? {
            candidate = Slug::with_suffix(&base, counter)?;
            counter += 1;
        }

        Ok(candidate)
    }

    /// Generates a slug and hands it to `write`, regenerating when the write
    /// fails with [`DomainError::SlugConflict`].
    pub async fn write_with_unique_slug<T, F, Fut>(
        &self,
        text: Option<&str>,
        exclude_id: Option<i64>,
        mut write: F,
    ) -> DomainResult<T>
    where
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        for attempt in 1..=MAX_SLUG_WRITE_ATTEMPTS {
            let slug = self.generate_unique_slug(text, exclude_id).await?;
            match write(slug.clone()).await {
                Err(DomainError::SlugConflict(detail)) => {
                    tracing::warn!(
                        collection = self.scope().collection(),
                        slug = %slug,
                        attempt,
                        detail = %detail,
                        "slug taken by a concurrent write, regenerating"
                    );
                }
                other => return other,
            }
        }

        Err(DomainError::Conflict(format!(
            "could not allocate a unique slug in {} after {MAX_SLUG_WRITE_ATTEMPTS} attempts",
            self.scope()
        )))
    }
}

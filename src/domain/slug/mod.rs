// src/domain/slug/mod.rs
pub mod backfill;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use backfill::{BackfillFailure, BackfillReport, SlugBackfillService};
pub use repository::{MissingSlug, SlugRepository};
pub use services::{MAX_SLUG_WRITE_ATTEMPTS, UniqueSlugService};
pub use value_objects::{Slug, SlugScope};

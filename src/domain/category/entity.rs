// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    /// `None` only for legacy rows the backfill has not reached yet.
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(name: CategoryName, slug: Slug, created_at: DateTime<Utc>) -> Self {
        Self {
            name,
            slug,
            created_at,
        }
    }
}

/// Renames a category; the slug is always regenerated alongside the name.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub updated_at: DateTime<Utc>,
}

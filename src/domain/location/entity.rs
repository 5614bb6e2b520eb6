use crate::domain::location::value_objects::{LocationId, LocationName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub name: LocationName,
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: LocationName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

impl NewLocation {
    pub fn new(name: LocationName, slug: Slug, created_at: DateTime<Utc>) -> Self {
        Self {
            name,
            slug,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationUpdate {
    pub id: LocationId,
    pub name: LocationName,
    pub slug: Slug,
    pub updated_at: DateTime<Utc>,
}

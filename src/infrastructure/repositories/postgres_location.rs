// src/infrastructure/repositories/postgres_location.rs
use super::slugs::{LOCATIONS, stored_slug};
use super::{map_delete_sqlx, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::location::{
    Location, LocationId, LocationName, LocationRepository, LocationUpdate, NewLocation,
};
use crate::domain::slug::{MissingSlug, Slug, SlugRepository, SlugScope};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const LOCATION_COLUMNS: &str = "id, name, slug, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl PostgresLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LocationRow {
    id: i64,
    name: String,
    slug: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LocationRow> for Location {
    type Error = DomainError;

    fn try_from(row: LocationRow) -> Result<Self, Self::Error> {
        Ok(Location {
            id: LocationId::new(row.id)?,
            name: LocationName::new(row.name)?,
            slug: stored_slug(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    async fn insert(&self, location: NewLocation) -> DomainResult<Location> {
        let sql = format!(
            "INSERT INTO locations (name, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {LOCATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(location.name.as_str())
            .bind(location.slug.as_str())
            .bind(location.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Location::try_from(row)
    }

    async fn update(&self, update: LocationUpdate) -> DomainResult<Location> {
        let sql = format!(
            "UPDATE locations SET name = $2, slug = $3, updated_at = $4
             WHERE id = $1
             RETURNING {LOCATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(i64::from(update.id))
            .bind(update.name.as_str())
            .bind(update.slug.as_str())
            .bind(update.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("location not found".into()))?;

        Location::try_from(row)
    }

    async fn delete(&self, id: LocationId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| map_delete_sqlx(err, "location"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("location not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1");
        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Location::try_from).transpose()
    }

    async fn find_by_name(
        &self,
        name: &LocationName,
        exclude: Option<LocationId>,
    ) -> DomainResult<Option<Location>> {
        let sql = format!(
            "SELECT {LOCATION_COLUMNS} FROM locations
             WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)"
        );
        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(name.as_str())
            .bind(exclude.map(i64::from))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Location::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Location>> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE slug = $1");
        let row = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Location::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Location>> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations ORDER BY name, id");
        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Location::try_from).collect()
    }
}

#[async_trait]
impl SlugRepository for PostgresLocationRepository {
    fn scope(&self) -> SlugScope {
        SlugScope::Location
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        LOCATIONS.slug_exists(&self.pool, slug, exclude_id).await
    }

    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>> {
        LOCATIONS.find_missing(&self.pool).await
    }

    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()> {
        LOCATIONS.assign(&self.pool, id, slug).await
    }
}

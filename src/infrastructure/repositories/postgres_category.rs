// src/infrastructure/repositories/postgres_category.rs
use super::slugs::{CATEGORIES, stored_slug};
use super::{map_delete_sqlx, map_sqlx};
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::location::LocationId;
use crate::domain::slug::{MissingSlug, Slug, SlugRepository, SlugScope};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: stored_slug(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_categories(rows: Vec<CategoryRow>) -> DomainResult<Vec<Category>> {
    rows.into_iter().map(Category::try_from).collect()
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, name, slug, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = $2, slug = $3, updated_at = $4
             WHERE id = $1
             RETURNING id, name, slug, created_at, updated_at",
        )
        .bind(i64::from(update.id))
        .bind(update.name.as_str())
        .bind(update.slug.as_str())
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| map_delete_sqlx(err, "category"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at, updated_at FROM categories
             WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(name.as_str())
        .bind(exclude.map(i64::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at, updated_at FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at, updated_at FROM categories ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_categories(rows)
    }

    async fn list_in_use(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, c.name, c.slug, c.created_at, c.updated_at FROM categories c
             WHERE EXISTS (SELECT 1 FROM customers cu WHERE cu.category_id = c.id)
             ORDER BY c.name, c.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_categories(rows)
    }

    async fn list_by_location(&self, location: LocationId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, c.name, c.slug, c.created_at, c.updated_at FROM categories c
             WHERE EXISTS (
                 SELECT 1 FROM customers cu
                 WHERE cu.category_id = c.id AND cu.location_id = $1
             )
             ORDER BY c.name, c.id",
        )
        .bind(i64::from(location))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_categories(rows)
    }
}

#[async_trait]
impl SlugRepository for PostgresCategoryRepository {
    fn scope(&self) -> SlugScope {
        SlugScope::Category
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        CATEGORIES.slug_exists(&self.pool, slug, exclude_id).await
    }

    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>> {
        CATEGORIES.find_missing(&self.pool).await
    }

    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()> {
        CATEGORIES.assign(&self.pool, id, slug).await
    }
}

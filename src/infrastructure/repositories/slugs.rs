// src/infrastructure/repositories/slugs.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{MissingSlug, Slug};
use sqlx::PgPool;

/// Slug column access shared by the slug-bearing tables. `table` and
/// `source_column` are compile-time identifiers, never user input.
#[derive(Debug, Clone, Copy)]
pub(super) struct SlugTable {
    pub table: &'static str,
    pub source_column: &'static str,
}

pub(super) const CUSTOMERS: SlugTable = SlugTable {
    table: "customers",
    source_column: "shop_name",
};
pub(super) const CATEGORIES: SlugTable = SlugTable {
    table: "categories",
    source_column: "name",
};
pub(super) const LOCATIONS: SlugTable = SlugTable {
    table: "locations",
    source_column: "name",
};

impl SlugTable {
    pub(super) async fn slug_exists(
        self,
        pool: &PgPool,
        slug: &Slug,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
            self.table
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(slug.as_str())
            .bind(exclude_id)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx)
    }

    /// Blank slugs count as missing.
    pub(super) async fn find_missing(self, pool: &PgPool) -> DomainResult<Vec<MissingSlug>> {
        let sql = format!(
            "SELECT id, {} FROM {} WHERE slug IS NULL OR btrim(slug) = '' ORDER BY id",
            self.source_column, self.table
        );
        let rows = sqlx::query_as::<_, (i64, Option<String>)>(&sql)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows
            .into_iter()
            .map(|(id, source_text)| MissingSlug { id, source_text })
            .collect())
    }

    pub(super) async fn assign(self, pool: &PgPool, id: i64, slug: &Slug) -> DomainResult<()> {
        let sql = format!("UPDATE {} SET slug = $2 WHERE id = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(slug.as_str())
            .execute(pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "{} record {id} not found",
                self.table
            )));
        }
        Ok(())
    }
}

/// Slugs read back from storage; blank legacy values are treated as missing.
pub(super) fn stored_slug(value: Option<String>) -> DomainResult<Option<Slug>> {
    value
        .filter(|slug| !slug.trim().is_empty())
        .map(Slug::new)
        .transpose()
}

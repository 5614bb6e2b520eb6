// src/infrastructure/repositories/postgres_admin.rs
use super::map_sqlx;
use crate::domain::admin::{Admin, AdminId, AdminRepository, NewAdmin, PasswordHash, Username};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Admin {
            id: AdminId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn insert(&self, admin: NewAdmin) -> DomainResult<Admin> {
        let NewAdmin {
            username,
            password_hash,
            created_at,
        } = admin;

        let row = sqlx::query_as::<_, AdminRow>(
            "INSERT INTO admins (username, password_hash, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, username, password_hash, created_at",
        )
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Admin::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Admin::try_from).transpose()
    }
}

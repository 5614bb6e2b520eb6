use super::map_sqlx;
use crate::domain::customer::ShopName;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::join_request::{
    JoinRequest, JoinRequestId, JoinRequestRepository, NewJoinRequest,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresJoinRequestRepository {
    pool: PgPool,
}

impl PostgresJoinRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JoinRequestRow {
    id: i64,
    shop_name: String,
    owner_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    category: Option<String>,
    location: Option<String>,
    message: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<JoinRequestRow> for JoinRequest {
    type Error = DomainError;

    fn try_from(row: JoinRequestRow) -> Result<Self, Self::Error> {
        Ok(JoinRequest {
            id: JoinRequestId::new(row.id)?,
            shop_name: ShopName::new(row.shop_name)?,
            owner_name: row.owner_name,
            phone: row.phone,
            email: row.email,
            category: row.category,
            location: row.location,
            message: row.message,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl JoinRequestRepository for PostgresJoinRequestRepository {
    async fn insert(&self, request: NewJoinRequest) -> DomainResult<JoinRequest> {
        let row = sqlx::query_as::<_, JoinRequestRow>(
            "INSERT INTO join_requests
                 (shop_name, owner_name, phone, email, category, location, message, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, shop_name, owner_name, phone, email, category, location, message, created_at",
        )
        .bind(request.shop_name.as_str())
        .bind(request.owner_name)
        .bind(request.phone)
        .bind(request.email)
        .bind(request.category)
        .bind(request.location)
        .bind(request.message)
        .bind(request.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        JoinRequest::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<JoinRequest>> {
        let rows = sqlx::query_as::<_, JoinRequestRow>(
            "SELECT id, shop_name, owner_name, phone, email, category, location, message, created_at
             FROM join_requests ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(JoinRequest::try_from).collect()
    }

    async fn delete(&self, id: JoinRequestId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM join_requests WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("request not found".into()));
        }
        Ok(())
    }
}

use super::map_sqlx;
use crate::domain::customer::CustomerId;
use crate::domain::enquiry::{Enquiry, EnquiryId, EnquiryRepository, NewEnquiry};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresEnquiryRepository {
    pool: PgPool,
}

impl PostgresEnquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EnquiryRow {
    id: i64,
    shop_id: i64,
    name: Option<String>,
    phone: Option<String>,
    enquiry: Option<String>,
    referred_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EnquiryRow> for Enquiry {
    type Error = DomainError;

    fn try_from(row: EnquiryRow) -> Result<Self, Self::Error> {
        Ok(Enquiry {
            id: EnquiryId::new(row.id)?,
            shop_id: CustomerId::new(row.shop_id)?,
            name: row.name,
            phone: row.phone,
            enquiry: row.enquiry,
            referred_by: row.referred_by,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl EnquiryRepository for PostgresEnquiryRepository {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        let row = sqlx::query_as::<_, EnquiryRow>(
            "INSERT INTO enquiries (shop_id, name, phone, enquiry, referred_by, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, shop_id, name, phone, enquiry, referred_by, created_at",
        )
        .bind(i64::from(enquiry.shop_id))
        .bind(enquiry.name)
        .bind(enquiry.phone)
        .bind(enquiry.enquiry)
        .bind(enquiry.referred_by)
        .bind(enquiry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Enquiry::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<Enquiry>> {
        let rows = sqlx::query_as::<_, EnquiryRow>(
            "SELECT id, shop_id, name, phone, enquiry, referred_by, created_at
             FROM enquiries ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Enquiry::try_from).collect()
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        sqlx::query("DELETE FROM enquiries")
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(map_sqlx)
    }
}

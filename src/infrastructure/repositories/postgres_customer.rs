// src/infrastructure/repositories/postgres_customer.rs
use super::map_sqlx;
use super::slugs::{CUSTOMERS, stored_slug};
use crate::domain::category::CategoryId;
use crate::domain::customer::{
    Customer, CustomerFilter, CustomerId, CustomerPhotos, CustomerProfile, CustomerProfilePatch,
    CustomerRepository, CustomerUpdate, NewCustomer, ShopName,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::location::LocationId;
use crate::domain::slug::{MissingSlug, Slug, SlugRepository, SlugScope};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CUSTOMER_COLUMNS: &str = "id, shop_name, slug, owner_name, owner_phone, shop_phone, email, \
     website, address, shop_description, shop_article, shop_photo, shop_photos, owner_photo, \
     category_id, location_id, joined_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    shop_name: String,
    slug: Option<String>,
    owner_name: Option<String>,
    owner_phone: Option<String>,
    shop_phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    address: Option<String>,
    shop_description: Option<String>,
    shop_article: Option<String>,
    shop_photo: Option<String>,
    shop_photos: Vec<String>,
    owner_photo: Option<String>,
    category_id: i64,
    location_id: i64,
    joined_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: CustomerId::new(row.id)?,
            shop_name: ShopName::new(row.shop_name)?,
            slug: stored_slug(row.slug)?,
            profile: CustomerProfile {
                owner_name: row.owner_name,
                owner_phone: row.owner_phone,
                shop_phone: row.shop_phone,
                email: row.email,
                website: row.website,
                address: row.address,
                shop_description: row.shop_description,
                shop_article: row.shop_article,
            },
            photos: CustomerPhotos {
                shop_photo: row.shop_photo,
                shop_photos: row.shop_photos,
                owner_photo: row.owner_photo,
            },
            category_id: CategoryId::new(row.category_id)?,
            location_id: LocationId::new(row.location_id)?,
            joined_at: row.joined_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escapes `LIKE` wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn insert(&self, customer: NewCustomer) -> DomainResult<Customer> {
        let NewCustomer {
            shop_name,
            slug,
            profile,
            photos,
            category_id,
            location_id,
            joined_at,
            created_at,
        } = customer;

        let sql = format!(
            "INSERT INTO customers (shop_name, slug, owner_name, owner_phone, shop_phone, email,
                 website, address, shop_description, shop_article, shop_photo, shop_photos,
                 owner_photo, category_id, location_id, joined_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $17)
             RETURNING {CUSTOMER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(shop_name.as_str())
            .bind(slug.as_str())
            .bind(profile.owner_name)
            .bind(profile.owner_phone)
            .bind(profile.shop_phone)
            .bind(profile.email)
            .bind(profile.website)
            .bind(profile.address)
            .bind(profile.shop_description)
            .bind(profile.shop_article)
            .bind(photos.shop_photo)
            .bind(photos.shop_photos)
            .bind(photos.owner_photo)
            .bind(i64::from(category_id))
            .bind(i64::from(location_id))
            .bind(joined_at)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Customer::try_from(row)
    }

    async fn update(&self, update: CustomerUpdate) -> DomainResult<Customer> {
        let CustomerUpdate {
            id,
            shop_name,
            slug,
            profile,
            shop_photo,
            shop_photos,
            owner_photo,
            category_id,
            location_id,
            joined_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE customers SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(shop_name) = shop_name {
            builder.push(", shop_name = ");
            builder.push_bind(String::from(shop_name));
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        let CustomerProfilePatch {
            owner_name,
            owner_phone,
            shop_phone,
            email,
            website,
            address,
            shop_description,
            shop_article,
        } = profile;
        for (column, value) in [
            ("owner_name", owner_name),
            ("owner_phone", owner_phone),
            ("shop_phone", shop_phone),
            ("email", email),
            ("website", website),
            ("address", address),
            ("shop_description", shop_description),
            ("shop_article", shop_article),
        ] {
            if let Some(value) = value {
                builder.push(format!(", {column} = "));
                builder.push_bind(value);
            }
        }

        if let Some(shop_photo) = shop_photo {
            builder.push(", shop_photo = ");
            builder.push_bind(shop_photo);
        }

        if let Some(shop_photos) = shop_photos {
            builder.push(", shop_photos = ");
            builder.push_bind(shop_photos);
        }

        if let Some(owner_photo) = owner_photo {
            builder.push(", owner_photo = ");
            builder.push_bind(owner_photo);
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(location_id) = location_id {
            builder.push(", location_id = ");
            builder.push_bind(i64::from(location_id));
        }

        if let Some(joined_at) = joined_at {
            builder.push(", joined_at = ");
            builder.push_bind(joined_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {CUSTOMER_COLUMNS}"));

        let row = builder
            .build_query_as::<CustomerRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;

        Customer::try_from(row)
    }

    async fn delete(&self, id: CustomerId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("customer not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1");
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Customer>> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE slug = $1");
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    async fn list(&self, filter: &CustomerFilter) -> DomainResult<Vec<Customer>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(CUSTOMER_COLUMNS);
        builder.push(" FROM customers WHERE TRUE");

        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(location_id) = filter.location_id {
            builder.push(" AND location_id = ");
            builder.push_bind(i64::from(location_id));
        }
        if let Some(search) = filter.search.as_deref() {
            builder.push(" AND shop_name ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(search)));
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<CustomerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Customer::try_from).collect()
    }
}

#[async_trait]
impl SlugRepository for PostgresCustomerRepository {
    fn scope(&self) -> SlugScope {
        SlugScope::Shop
    }

    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        CUSTOMERS.slug_exists(&self.pool, slug, exclude_id).await
    }

    async fn find_missing_slugs(&self) -> DomainResult<Vec<MissingSlug>> {
        CUSTOMERS.find_missing(&self.pool).await
    }

    async fn assign_slug(&self, id: i64, slug: &Slug) -> DomainResult<()> {
        CUSTOMERS.assign(&self.pool, id, slug).await
    }
}

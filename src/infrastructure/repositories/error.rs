use crate::domain::errors::DomainError;

const CNT_CUSTOMER_SLUG: &str = "customers_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_LOCATION_SLUG: &str = "locations_slug_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_LOCATION_NAME: &str = "locations_name_key";
const CNT_ADMIN_USERNAME: &str = "admins_username_key";
const CNT_CUSTOMER_CATEGORY: &str = "customers_category_id_fkey";
const CNT_CUSTOMER_LOCATION: &str = "customers_location_id_fkey";
const CNT_ENQUIRY_SHOP: &str = "enquiries_shop_id_fkey";

const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps sqlx errors onto domain errors. Slug uniqueness violations become
/// [`DomainError::SlugConflict`] so writers can retry with a fresh slug.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CUSTOMER_SLUG | CNT_CATEGORY_SLUG | CNT_LOCATION_SLUG => {
                        DomainError::SlugConflict(constraint.to_string())
                    }
                    CNT_CATEGORY_NAME => DomainError::Conflict("category already exists".into()),
                    CNT_LOCATION_NAME => DomainError::Conflict("location already exists".into()),
                    CNT_ADMIN_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_CUSTOMER_CATEGORY | CNT_CUSTOMER_LOCATION => {
                        DomainError::Validation("invalid category or location".into())
                    }
                    CNT_ENQUIRY_SHOP => DomainError::Validation("invalid shop".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    SQLSTATE_FOREIGN_KEY_VIOLATION => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Like [`map_sqlx`], but a foreign-key violation means other rows still
/// point at the record being deleted.
pub fn map_delete_sqlx(err: sqlx::Error, what: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(SQLSTATE_FOREIGN_KEY_VIOLATION) {
            return DomainError::Conflict(format!("{what} is still referenced by shops"));
        }
    }
    map_sqlx(err)
}

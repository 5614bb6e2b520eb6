use crate::domain::admin::value_objects::{AdminId, PasswordHash, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

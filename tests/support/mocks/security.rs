// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use shop_directory::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedAdmin, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use shop_directory::domain::admin::AdminId;

use super::time::fixed_now;

pub const TEST_TOKEN: &str = "test-token";

pub fn test_admin() -> AuthenticatedAdmin {
    AuthenticatedAdmin {
        id: AdminId(1),
        username: "admin".into(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(2),
    }
}

/// Stores `hashed:<password>` so tests can seed admins without argon2.
#[derive(Clone, Default)]
pub struct FakePasswordHasher;

impl FakePasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("password mismatch"))
        }
    }
}

/// Issues [`TEST_TOKEN`] and accepts nothing else.
#[derive(Clone, Default)]
pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let admin = test_admin();
        Ok(AuthTokenDto {
            token: TEST_TOKEN.into(),
            issued_at: admin.issued_at,
            expires_at: admin.expires_at,
            expires_in: (admin.expires_at - admin.issued_at).num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        if token == TEST_TOKEN {
            Ok(test_admin())
        } else {
            Err(ApplicationError::unauthorized("invalid token"))
        }
    }
}

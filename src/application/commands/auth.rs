// src/application/commands/auth.rs
use std::sync::Arc;

use super::non_blank;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
    },
    domain::admin::{AdminRepository, NewAdmin, PasswordHash, Username},
};

pub struct LoginCommand {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct AuthCommandService {
    admin_repo: Arc<dyn AdminRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
}

impl AuthCommandService {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admin_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        let (Some(username), Some(password)) = (
            non_blank(command.username),
            command.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(ApplicationError::validation(
                "username and password required",
            ));
        };

        let username = Username::new(username)?;
        let admin = self
            .admin_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        match self
            .password_hasher
            .verify(&password, admin.password_hash.as_str())
            .await
        {
            Ok(()) => {}
            Err(ApplicationError::Unauthorized(_)) => {
                return Err(ApplicationError::unauthorized("invalid credentials"));
            }
            Err(err) => return Err(err),
        }

        tracing::info!(admin = %admin.username, "admin logged in");
        self.token_manager
            .issue(TokenSubject {
                admin_id: admin.id,
                username: admin.username.to_string(),
            })
            .await
    }

    /// Creates the admin account unless one with that username exists.
    /// Returns whether an account was created.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> ApplicationResult<bool> {
        if password.is_empty() {
            return Err(ApplicationError::validation("admin password cannot be empty"));
        }
        let username = Username::new(username)?;
        if self.admin_repo.find_by_username(&username).await?.is_some() {
            return Ok(false);
        }

        let hashed = self.password_hasher.hash(password).await?;
        let admin = self
            .admin_repo
            .insert(NewAdmin {
                username,
                password_hash: PasswordHash::new(hashed)?,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(admin = %admin.username, "seed admin created");
        Ok(true)
    }
}

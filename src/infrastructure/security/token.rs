// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedAdmin, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies admin bearer tokens as sealed biscuits.
///
/// Every token carries `admin(id, username)`, its issue and expiry instants,
/// and time checks that the authorizer enforces against the current clock.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    /// `private_key_hex` is a 32-byte Ed25519 private key in hex.
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

const TOKEN_CODE: &str = r#"
    admin({aid}, {aname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

fn token_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    HashMap::from([
        ("aid".to_string(), i64::from(subject.admin_id).into()),
        ("aname".to_string(), subject.username.clone().into()),
        ("issued".to_string(), issued_at.into()),
        ("exp".to_string(), expires_at.into()),
    ])
}

fn infrastructure<E: std::fmt::Display>(err: E) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

fn unauthorized<E: std::fmt::Display>(err: E) -> ApplicationError {
    ApplicationError::unauthorized(err.to_string())
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let token = Biscuit::builder()
            .code_with_params(
                TOKEN_CODE,
                token_params(&subject, issued_at, expires_at),
                HashMap::new(),
            )
            .map_err(infrastructure)?
            .build(self.root.as_ref())
            .map_err(infrastructure)?
            .seal()
            .map_err(infrastructure)?
            .to_base64()
            .map_err(infrastructure)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        let biscuit = Biscuit::from_base64(token, self.public).map_err(unauthorized)?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if admin($id, $name);")
            .map_err(infrastructure)?
            .build(&biscuit)
            .map_err(unauthorized)?;
        authorizer.authorize().map_err(unauthorized)?;

        let view = biscuit.authorizer().map_err(unauthorized)?;
        let (facts, _, _, _) = view.dump();

        crate::infrastructure::security::claims::parse_claims(facts)
    }
}

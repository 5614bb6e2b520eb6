// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedAdmin,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::admin::AdminId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Extracts the admin identity from the authority block's facts.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedAdmin> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(&fact.predicate);
    }
    claims.into_admin()
}

#[derive(Default)]
struct Claims {
    admin: Option<(i64, String)>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

fn date_term(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl Claims {
    fn apply(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "admin" => {
                if let [Term::Integer(id), Term::Str(name)] = predicate.terms.as_slice() {
                    self.admin = Some((*id, name.clone()));
                }
            }
            "issued_at" => self.issued_at = date_term(predicate),
            "expires_at" => self.expires_at = date_term(predicate),
            _ => {}
        }
    }

    fn into_admin(self) -> ApplicationResult<AuthenticatedAdmin> {
        let (id, username) = self
            .admin
            .ok_or_else(|| ApplicationError::unauthorized("missing admin claim"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        Ok(AuthenticatedAdmin {
            id: AdminId::new(id).map_err(|_| ApplicationError::unauthorized("invalid admin id"))?,
            username,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

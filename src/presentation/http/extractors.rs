// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Requires a valid admin bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAdmin);

/// An admin token when one is sent. A token that is present but invalid is
/// still rejected with 401.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedAdmin>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(app_state)| app_state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

async fn authenticate(app_state: &HttpState, token: &str) -> Result<AuthenticatedAdmin, HttpError> {
    app_state
        .services
        .authenticate(token)
        .await
        .map_err(|err| {
            tracing::debug!(error = %err, "bearer token rejected");
            HttpError::from_error(ApplicationError::unauthorized("invalid or expired token"))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        authenticate(&app_state, header.token()).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => authenticate(&app_state, header.token())
                .await
                .map(|admin| Self(Some(admin))),
            None => Ok(Self(None)),
        }
    }
}

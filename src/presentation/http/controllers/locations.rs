// src/presentation/http/controllers/locations.rs
use crate::application::{
    commands::locations::{CreateLocationCommand, DeleteLocationCommand, UpdateLocationCommand},
    dto::{CategoryDto, LocationDto},
};
use crate::presentation::http::controllers::MessageResponse;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LocationRequest {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "Locations",
    responses((status = 200, description = "Locations sorted by name", body = [LocationDto]))
)]
pub async fn list_locations(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<LocationDto>>> {
    state
        .services
        .location_queries
        .list_locations()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/locations",
    tag = "Locations",
    request_body = LocationRequest,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Name missing", body = ErrorResponse),
        (status = 409, description = "Location already exists", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_location(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Json(payload): Json<LocationRequest>,
) -> HttpResult<(StatusCode, Json<LocationDto>)> {
    state
        .services
        .location_commands
        .create_location(&admin, CreateLocationCommand { name: payload.name })
        .await
        .into_http()
        .map(|location| (StatusCode::CREATED, Json(location)))
}

#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = "Locations",
    params(("id" = i64, Path, description = "Location id")),
    request_body = LocationRequest,
    responses(
        (status = 200, description = "Location updated", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 409, description = "Name taken by another location", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_location(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<LocationRequest>,
) -> HttpResult<Json<LocationDto>> {
    let command = UpdateLocationCommand {
        id,
        name: payload.name,
    };
    state
        .services
        .location_commands
        .update_location(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = "Locations",
    params(("id" = i64, Path, description = "Location id")),
    responses(
        (status = 200, description = "Location deleted", body = MessageResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 409, description = "Location still used by shops", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_location(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .location_commands
        .delete_location(&admin, DeleteLocationCommand { id })
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("location deleted")))
}

#[utoipa::path(
    get,
    path = "/api/locations/slug/{slug}",
    tag = "Locations",
    params(("slug" = String, Path, description = "Location slug")),
    responses(
        (status = 200, description = "Location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorResponse)
    )
)]
pub async fn get_location_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<LocationDto>> {
    state
        .services
        .location_queries
        .get_location_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

/// Categories of the shops listed in a location.
#[utoipa::path(
    get,
    path = "/api/locations/{id}/categories",
    tag = "Locations",
    params(("id" = i64, Path, description = "Location id")),
    responses((status = 200, description = "Distinct categories sorted by name", body = [CategoryDto]))
)]
pub async fn categories_in_location(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .location_queries
        .categories_in_location(id)
        .await
        .into_http()
        .map(Json)
}

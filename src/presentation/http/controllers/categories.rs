// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
};
use crate::presentation::http::controllers::MessageResponse;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// Admins see every category; the public only sees categories in use.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Categories sorted by name", body = [CategoryDto]),
        (status = 401, description = "Invalid token", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = []))
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(admin): MaybeAuthenticated,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(admin.is_some())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Name missing", body = ErrorResponse),
        (status = 409, description = "Category already exists", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand { name: payload.name };
    state
        .services
        .category_commands
        .create_category(&admin, command)
        .await
        .into_http()
        .map(|category| (StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Name taken by another category", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
    };
    state
        .services
        .category_commands
        .update_category(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category still used by shops", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .category_commands
        .delete_category(&admin, DeleteCategoryCommand { id })
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("category deleted")))
}

#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    tag = "Categories",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

// src/presentation/http/controllers/join_requests.rs
use crate::application::{commands::join_requests::SubmitJoinRequestCommand, dto::JoinRequestDto};
use crate::presentation::http::controllers::MessageResponse;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinRequestRequest {
    pub shop_name: Option<String>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

impl From<JoinRequestRequest> for SubmitJoinRequestCommand {
    fn from(request: JoinRequestRequest) -> Self {
        Self {
            shop_name: request.shop_name,
            owner_name: request.owner_name,
            phone: request.phone,
            email: request.email,
            category: request.category,
            location: request.location,
            message: request.message,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/join-requests",
    tag = "Join requests",
    request_body = JoinRequestRequest,
    responses(
        (status = 201, description = "Request stored", body = JoinRequestDto),
        (status = 400, description = "Shop name missing", body = ErrorResponse)
    )
)]
pub async fn submit_join_request(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<JoinRequestRequest>,
) -> HttpResult<(StatusCode, Json<JoinRequestDto>)> {
    state
        .services
        .join_request_commands
        .submit(payload.into())
        .await
        .into_http()
        .map(|request| (StatusCode::CREATED, Json(request)))
}

#[utoipa::path(
    get,
    path = "/api/join-requests",
    tag = "Join requests",
    responses((status = 200, description = "Requests, newest first", body = [JoinRequestDto])),
    security(("bearerAuth" = []))
)]
pub async fn list_join_requests(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
) -> HttpResult<Json<Vec<JoinRequestDto>>> {
    state
        .services
        .join_request_queries
        .list_join_requests()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/join-requests/{id}",
    tag = "Join requests",
    params(("id" = i64, Path, description = "Join request id")),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse),
        (status = 404, description = "Request not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_join_request(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .join_request_commands
        .delete(&admin, id)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("join request deleted")))
}

// src/presentation/http/controllers/enquiries.rs
use crate::application::{commands::enquiries::SubmitEnquiryCommand, dto::EnquiryDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryRequest {
    /// Shop id, as a number or a numeric string.
    #[schema(value_type = Option<i64>)]
    pub shop_id: Option<Value>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub enquiry: Option<String>,
    pub referred_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClearEnquiriesResponse {
    pub success: bool,
    pub deleted: u64,
}

fn shop_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

#[utoipa::path(
    post,
    path = "/api/enquiries",
    tag = "Enquiries",
    request_body = EnquiryRequest,
    responses(
        (status = 201, description = "Enquiry stored", body = EnquiryDto),
        (status = 400, description = "Unknown shop", body = ErrorResponse)
    )
)]
pub async fn submit_enquiry(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<EnquiryRequest>,
) -> HttpResult<(StatusCode, Json<EnquiryDto>)> {
    let command = SubmitEnquiryCommand {
        shop_id: shop_id(payload.shop_id.as_ref()),
        name: payload.name,
        phone: payload.phone,
        enquiry: payload.enquiry,
        referred_by: payload.referred_by,
    };
    state
        .services
        .enquiry_commands
        .submit(command)
        .await
        .into_http()
        .map(|enquiry| (StatusCode::CREATED, Json(enquiry)))
}

#[utoipa::path(
    get,
    path = "/api/enquiries",
    tag = "Enquiries",
    responses((status = 200, description = "All enquiries, newest first", body = [EnquiryDto])),
    security(("bearerAuth" = []))
)]
pub async fn list_enquiries(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
) -> HttpResult<Json<Vec<EnquiryDto>>> {
    state
        .services
        .enquiry_queries
        .list_enquiries()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/enquiries",
    tag = "Enquiries",
    responses((status = 200, description = "All enquiries deleted", body = ClearEnquiriesResponse)),
    security(("bearerAuth" = []))
)]
pub async fn clear_enquiries(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
) -> HttpResult<Json<ClearEnquiriesResponse>> {
    let deleted = state
        .services
        .enquiry_commands
        .clear(&admin)
        .await
        .into_http()?;
    Ok(Json(ClearEnquiriesResponse {
        success: true,
        deleted,
    }))
}

// src/presentation/http/controllers/customers.rs
use crate::application::{
    commands::customers::{CreateCustomerCommand, DeleteCustomerCommand, UpdateCustomerCommand},
    dto::CustomerDto,
    queries::customers::ListCustomersQuery,
};
use crate::presentation::http::controllers::MessageResponse;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::multipart::CustomerForm;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerListParams {
    /// Category id.
    pub category: Option<String>,
    /// Location id.
    pub location: Option<String>,
    /// Case-insensitive fragment of the shop name.
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PhotoGroupParams {
    /// Slider group, 1 to 3.
    pub group: Option<String>,
}

/// Multipart layout of the create and update forms.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CustomerFormDoc {
    shop_name: Option<String>,
    owner_name: Option<String>,
    owner_phone: Option<String>,
    shop_phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    address: Option<String>,
    shop_description: Option<String>,
    shop_article: Option<String>,
    category: Option<String>,
    location: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    joined_at: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    shop_photo: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    owner_photo: Option<Vec<u8>>,
    #[schema(value_type = Option<Vec<String>>, format = Binary)]
    shop_photos: Option<Vec<Vec<u8>>>,
}

fn parse_id_param(raw: Option<String>, what: &str) -> HttpResult<Option<i64>> {
    match raw.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| HttpError::bad_request(format!("invalid {what}"))),
    }
}

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    params(CustomerListParams),
    responses(
        (status = 200, description = "Shops, newest first", body = [CustomerDto]),
        (status = 400, description = "Malformed filter", body = ErrorResponse)
    )
)]
pub async fn list_customers(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CustomerListParams>,
) -> HttpResult<Json<Vec<CustomerDto>>> {
    let query = ListCustomersQuery {
        category: parse_id_param(params.category, "category")?,
        location: parse_id_param(params.location, "location")?,
        q: params.q,
    };
    state
        .services
        .customer_queries
        .list_customers(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body(content = CustomerFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Shop created", body = CustomerDto),
        (status = 400, description = "Invalid form", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CustomerDto>)> {
    let mut form = CustomerForm::read(multipart).await?;
    let command = CreateCustomerCommand {
        shop_name: form.take("shopName"),
        profile: form.take_profile(),
        category: form.take("category"),
        location: form.take("location"),
        joined_at: form.take("joinedAt"),
        uploads: std::mem::take(&mut form.uploads),
    };

    state
        .services
        .customer_commands
        .create_customer(&admin, command)
        .await
        .into_http()
        .map(|customer| (StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Shop id")),
    responses(
        (status = 200, description = "Shop", body = CustomerDto),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    )
)]
pub async fn get_customer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_queries
        .get_customer(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/customers/slug/{slug}",
    tag = "Customers",
    params(("slug" = String, Path, description = "Shop slug")),
    responses(
        (status = 200, description = "Shop", body = CustomerDto),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    )
)]
pub async fn get_customer_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_queries
        .get_customer_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/photos",
    tag = "Customers",
    params(("id" = i64, Path, description = "Shop id"), PhotoGroupParams),
    responses(
        (status = 200, description = "Stored photo names", body = [String]),
        (status = 400, description = "Group outside 1..=3", body = ErrorResponse),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    )
)]
pub async fn customer_photos(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<PhotoGroupParams>,
) -> HttpResult<Json<Vec<String>>> {
    state
        .services
        .customer_queries
        .customer_photos(id, params.group.as_deref())
        .await
        .into_http()
        .map(Json)
}

/// Partial update. Only the fields present in the form change.
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Shop id")),
    request_body(content = CustomerFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Shop updated", body = CustomerDto),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<CustomerDto>> {
    let mut form = CustomerForm::read(multipart).await?;
    let command = UpdateCustomerCommand {
        id,
        shop_name: form.take("shopName"),
        profile: form.take_profile_patch(),
        category: form.take("category"),
        location: form.take("location"),
        joined_at: form.take("joinedAt"),
        uploads: std::mem::take(&mut form.uploads),
    };

    state
        .services
        .customer_commands
        .update_customer(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Shop id")),
    responses(
        (status = 200, description = "Shop deleted", body = MessageResponse),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_customer(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .customer_commands
        .delete_customer(&admin, DeleteCustomerCommand { id })
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("customer deleted")))
}

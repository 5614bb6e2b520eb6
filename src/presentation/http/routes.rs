// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, categories, customers, enquiries, join_requests, locations, maintenance},
    middleware::{RateLimiterConfigError, RateLimiterLayer, login_rate_limiter},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub const BANNER: &str = "Shop directory API is running";

pub fn build_router(state: HttpState) -> Result<Router, RateLimiterConfigError> {
    let limiter = if state.settings.rate_limit_login {
        Some(login_rate_limiter()?)
    } else {
        None
    };
    Ok(build_router_with_rate_limiter(state, limiter))
}

/// Tests that drive the router without a socket pass `None`, since the
/// limiter keys on the peer address.
pub fn build_router_with_rate_limiter(
    state: HttpState,
    login_limiter: Option<RateLimiterLayer>,
) -> Router {
    let settings = state.settings.clone();

    let mut login = Router::new().route("/api/auth/login", post(auth::login));
    if let Some(limiter) = login_limiter {
        login = login.layer(limiter);
    }

    let customer_routes = Router::new()
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/slug/{slug}",
            get(customers::get_customer_by_slug),
        )
        .route(
            "/api/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route(
            "/api/customers/{id}/photos",
            get(customers::customer_photos),
        )
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes));

    Router::new()
        .merge(openapi::docs_router())
        .route("/", get(banner))
        .route("/health", get(health))
        .merge(login)
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/slug/{slug}",
            get(categories::get_category_by_slug),
        )
        .route(
            "/api/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/locations",
            get(locations::list_locations).post(locations::create_location),
        )
        .route(
            "/api/locations/slug/{slug}",
            get(locations::get_location_by_slug),
        )
        .route(
            "/api/locations/{id}",
            put(locations::update_location).delete(locations::delete_location),
        )
        .route(
            "/api/locations/{id}/categories",
            get(locations::categories_in_location),
        )
        .merge(customer_routes)
        .route(
            "/api/enquiries",
            get(enquiries::list_enquiries)
                .post(enquiries::submit_enquiry)
                .delete(enquiries::clear_enquiries),
        )
        .route(
            "/api/join-requests",
            get(join_requests::list_join_requests).post(join_requests::submit_join_request),
        )
        .route(
            "/api/join-requests/{id}",
            axum::routing::delete(join_requests::delete_join_request),
        )
        .route(
            "/api/maintenance/slug-backfill",
            post(maintenance::backfill_slugs),
        )
        .nest_service("/uploads", ServeDir::new(&settings.uploads_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

/// `*` anywhere in the list opens CORS to every origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

pub async fn banner() -> &'static str {
    BANNER
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

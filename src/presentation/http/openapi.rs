// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{
    MessageResponse, auth, categories, customers, enquiries, join_requests, locations, maintenance,
};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        categories::get_category_by_slug,
        locations::list_locations,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        locations::get_location_by_slug,
        locations::categories_in_location,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        customers::get_customer_by_slug,
        customers::customer_photos,
        customers::update_customer,
        customers::delete_customer,
        enquiries::submit_enquiry,
        enquiries::list_enquiries,
        enquiries::clear_enquiries,
        join_requests::submit_join_request,
        join_requests::list_join_requests,
        join_requests::delete_join_request,
        maintenance::backfill_slugs,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::LoginRequest,
            categories::CategoryRequest,
            locations::LocationRequest,
            customers::CustomerFormDoc,
            enquiries::EnquiryRequest,
            enquiries::ClearEnquiriesResponse,
            join_requests::JoinRequestRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::LocationDto,
            crate::application::dto::CustomerDto,
            crate::application::dto::ShopSummaryDto,
            crate::application::dto::EnquiryDto,
            crate::application::dto::JoinRequestDto,
            crate::application::dto::BackfillReportDto,
            crate::application::dto::BackfillFailureDto
        )
    ),
    tags(
        (name = "Auth", description = "Admin login"),
        (name = "Categories", description = "Shop categories"),
        (name = "Locations", description = "Shop locations"),
        (name = "Customers", description = "Shop listings and photos"),
        (name = "Enquiries", description = "Visitor enquiries about a shop"),
        (name = "Join requests", description = "Applications to be listed"),
        (name = "Maintenance", description = "Administrative jobs"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Shop Directory API",
        description = "Directory of shops with categories, locations and slug-based lookups",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (document at `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

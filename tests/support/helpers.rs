// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use shop_directory::application::services::{ApplicationServices, PortSet, RepositorySet};
use shop_directory::domain::slug::{SlugRepository, UniqueSlugService};
use shop_directory::infrastructure::util::DefaultSlugGenerator;
use shop_directory::presentation::http::state::{HttpSettings, HttpState};

use super::mocks::{
    FakePasswordHasher, FixedClock, InMemoryDirectory, RecordingFileStore, StaticTokenManager,
    TEST_TOKEN,
};

/// Services wired against one in-memory directory.
pub struct TestApp {
    pub directory: Arc<InMemoryDirectory>,
    pub files: Arc<RecordingFileStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let directory = InMemoryDirectory::new();
        let files = Arc::new(RecordingFileStore::default());
        let categories = directory.categories();
        let locations = directory.locations();
        let customers = directory.customers();

        let repos = RepositorySet {
            admins: directory.clone(),
            categories: categories.clone(),
            category_slugs: categories,
            locations: locations.clone(),
            location_slugs: locations,
            customers: customers.clone(),
            customer_slugs: customers,
            enquiries: directory.clone(),
            join_requests: directory.clone(),
        };
        let ports = PortSet {
            password_hasher: Arc::new(FakePasswordHasher),
            token_manager: Arc::new(StaticTokenManager),
            clock: Arc::new(FixedClock),
            slugger: Arc::new(DefaultSlugGenerator),
            file_store: files.clone(),
        };

        Self {
            services: Arc::new(ApplicationServices::new(repos, ports)),
            directory,
            files,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            settings: Arc::new(HttpSettings {
                uploads_dir: std::env::temp_dir(),
                allowed_origins: vec!["http://localhost:3000".into()],
                max_upload_bytes: 1024 * 1024,
                rate_limit_login: false,
            }),
        };
        shop_directory::presentation::http::routes::build_router_with_rate_limiter(state, None)
    }
}

pub fn make_test_router() -> (TestApp, axum::Router) {
    let app = TestApp::new();
    let router = app.router();
    (app, router)
}

/// Slug service over a single repository, with the real normalizer.
pub fn slug_service(repo: Arc<dyn SlugRepository>) -> UniqueSlugService {
    UniqueSlugService::new(repo, Arc::new(DefaultSlugGenerator))
}

pub fn authed(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
}

pub fn json_request(builder: axum::http::request::Builder, body: &Value) -> Request<Body> {
    builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// A multipart/form-data body with text fields and `(field, file name, bytes)` files.
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> (String, Vec<u8>) {
    let boundary = "----shop-directory-test-boundary";
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, file_name, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

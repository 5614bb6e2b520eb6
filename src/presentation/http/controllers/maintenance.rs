// src/presentation/http/controllers/maintenance.rs
use crate::application::dto::BackfillReportDto;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Assigns slugs to stored records that lack one. Per-record failures are
/// reported in the body rather than failing the request.
#[utoipa::path(
    post,
    path = "/api/maintenance/slug-backfill",
    tag = "Maintenance",
    responses((status = 200, description = "One report per collection", body = [BackfillReportDto])),
    security(("bearerAuth" = []))
)]
pub async fn backfill_slugs(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
) -> Json<Vec<BackfillReportDto>> {
    Json(
        state
            .services
            .maintenance_commands
            .backfill_slugs(&admin)
            .await,
    )
}

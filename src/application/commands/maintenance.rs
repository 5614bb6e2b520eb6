// src/application/commands/maintenance.rs
use std::sync::Arc;

use crate::{
    application::dto::{AuthenticatedAdmin, BackfillReportDto},
    domain::slug::SlugBackfillService,
};

pub struct MaintenanceCommandService {
    backfill: Arc<SlugBackfillService>,
}

impl MaintenanceCommandService {
    pub fn new(backfill: Arc<SlugBackfillService>) -> Self {
        Self { backfill }
    }

    /// Runs the slug backfill on demand. Failures end up in the reports.
    pub async fn backfill_slugs(&self, actor: &AuthenticatedAdmin) -> Vec<BackfillReportDto> {
        tracing::info!(admin = %actor.username, "slug backfill requested");
        self.backfill
            .backfill_slugs()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

// src/domain/slug/backfill.rs
use std::sync::Arc;

use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::services::UniqueSlugService;
use crate::domain::slug::value_objects::{Slug, SlugScope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillFailure {
    /// `None` when the scan of the collection itself failed.
    pub id: Option<i64>,
    pub message: String,
}

/// Outcome of one backfill pass over a single collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillReport {
    pub scope: SlugScope,
    pub scanned: usize,
    pub assigned: usize,
    pub failures: Vec<BackfillFailure>,
}

impl BackfillReport {
    fn new(scope: SlugScope) -> Self {
        Self {
            scope,
            scanned: 0,
            assigned: 0,
            failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Assigns slugs to records stored without one.
///
/// Safe to run any number of times: only records whose slug is missing are
/// touched, and each gets a slug-only partial update. Collections are scanned
/// in full with no pagination, so they are expected to stay small enough for a
/// single fetch. Records are processed one after another; a failing record is
/// logged and recorded in the report, and the pass moves on.
pub struct SlugBackfillService {
    targets: Vec<Arc<UniqueSlugService>>,
}

impl SlugBackfillService {
    pub fn new(targets: Vec<Arc<UniqueSlugService>>) -> Self {
        Self { targets }
    }

    pub async fn backfill_slugs(&self) -> Vec<BackfillReport> {
        let mut reports = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            reports.push(backfill_collection(target).await);
        }
        reports
    }
}

async fn backfill_collection(slugs: &UniqueSlugService) -> BackfillReport {
    let scope = slugs.scope();
    let repository: &dyn SlugRepository = slugs.repository();
    let mut report = BackfillReport::new(scope);

    let pending = match repository.find_missing_slugs().await {
        Ok(pending) => pending,
        Err(err) => {
            tracing::error!(collection = scope.collection(), error = %err, "slug backfill scan failed");
            report.failures.push(BackfillFailure {
                id: None,
                message: err.to_string(),
            });
            return report;
        }
    };

    if pending.is_empty() {
        tracing::debug!(collection = scope.collection(), "no records without slugs");
        return report;
    }

    tracing::info!(
        collection = scope.collection(),
        count = pending.len(),
        "found records without slugs, generating"
    );

    for record in pending {
        report.scanned += 1;
        let record_id = record.id;
        let result = slugs
            .write_with_unique_slug(record.source_text.as_deref(), None, |slug: Slug| async move {
                repository.assign_slug(record_id, &slug).await.map(|()| slug)
            })
            .await;

        match result {
            Ok(slug) => {
                tracing::debug!(collection = scope.collection(), id = record_id, slug = %slug, "slug assigned");
                report.assigned += 1;
            }
            Err(err) => {
                tracing::error!(
                    collection = scope.collection(),
                    id = record_id,
                    error = %err,
                    "failed to assign slug"
                );
                report.failures.push(BackfillFailure {
                    id: Some(record_id),
                    message: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        collection = scope.collection(),
        assigned = report.assigned,
        failed = report.failures.len(),
        "slug backfill finished"
    );
    report
}

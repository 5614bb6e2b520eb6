use crate::domain::slug::{BackfillFailure, BackfillReport};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackfillFailureDto {
    /// Absent when the collection scan itself failed.
    pub id: Option<i64>,
    pub message: String,
}

impl From<BackfillFailure> for BackfillFailureDto {
    fn from(failure: BackfillFailure) -> Self {
        Self {
            id: failure.id,
            message: failure.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackfillReportDto {
    pub collection: String,
    pub scanned: usize,
    pub assigned: usize,
    pub failures: Vec<BackfillFailureDto>,
}

impl From<BackfillReport> for BackfillReportDto {
    fn from(report: BackfillReport) -> Self {
        Self {
            collection: report.scope.collection().to_string(),
            scanned: report.scanned,
            assigned: report.assigned,
            failures: report.failures.into_iter().map(Into::into).collect(),
        }
    }
}

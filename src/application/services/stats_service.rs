//! Statistics page data service.

use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::StatsRepository;
use crate::domain::statistics::StatsSummary;
use crate::error::AppError;
use serde_json::json;

/// Records plus the metrics derived from them.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub summary: StatsSummary,
    pub items: Vec<LinkRecord>,
}

impl StatsReport {
    /// Builds a report from an arbitrary snapshot of records.
    pub fn from_records(items: Vec<LinkRecord>) -> Self {
        Self {
            summary: StatsSummary::from_records(&items),
            items,
        }
    }
}

/// Service for retrieving link statistics.
///
/// Fetches a snapshot from the repository and derives the summary metrics
/// with [`crate::domain::statistics`]. Holds no state of its own.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves all records with their summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn get_report(&self) -> Result<StatsReport, AppError> {
        let records = self.repository.fetch_all().await?;
        Ok(StatsReport::from_records(records))
    }

    /// Retrieves a single record by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn get_link(&self, code: &str) -> Result<LinkRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))
    }
}

//! Repository trait for the link records behind the statistics page.

use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Supplies the link records that statistics are computed from.
///
/// The aggregator in [`crate::domain::statistics`] never assumes where records
/// come from; anything that can produce a snapshot implements this trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::sample::SampleStatsRepository`] - fixed illustrative records
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Returns a snapshot of link records in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the records cannot be retrieved.
    async fn fetch_all(&self) -> Result<Vec<LinkRecord>, AppError>;

    /// Finds a single record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the records cannot be retrieved.
    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, AppError>;
}

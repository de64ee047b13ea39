//! DTOs for statistics endpoints.

use serde::Serialize;

use crate::api::dto::link::LinkDto;
use crate::domain::statistics::StatsSummary;

/// Summary metrics plus the records they were computed from.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub summary: StatsSummary,
    pub items: Vec<LinkDto>,
}

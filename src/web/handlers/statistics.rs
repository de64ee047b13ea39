//! Statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};

use crate::domain::entities::LinkRecord;
use crate::domain::statistics::StatsSummary;
use crate::error::AppError;
use crate::state::AppState;

/// One table row, pre-formatted for display.
pub struct StatsRow {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: u64,
    pub created: String,
    pub last_clicked: String,
    pub location: String,
}

impl StatsRow {
    fn from_record(record: &LinkRecord, base_url: &str) -> Self {
        Self {
            original_url: record.original_url.clone(),
            short_code: record.short_code.clone(),
            short_url: record.short_url(base_url),
            clicks: record.clicks,
            created: format_date(record.created_at),
            last_clicked: record
                .last_clicked
                .map(format_date)
                .unwrap_or_else(|| "Never".to_string()),
            location: record
                .location
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Template for the statistics page.
///
/// Renders `templates/statistics.html` with:
/// - Summary cards (total URLs, total clicks, average clicks, active links)
/// - Per-link performance table
#[derive(Template, WebTemplate)]
#[template(path = "statistics.html")]
pub struct StatisticsTemplate {
    pub summary: StatsSummary,
    pub rows: Vec<StatsRow>,
}

/// Renders the statistics page.
///
/// # Endpoint
///
/// `GET /statistics`
///
/// # Errors
///
/// Propagates repository failures as a JSON error response.
pub async fn statistics_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = state.stats_service.get_report().await?;

    let rows = report
        .items
        .iter()
        .map(|record| StatsRow::from_record(record, &state.short_base_url))
        .collect();

    Ok(StatisticsTemplate {
        summary: report.summary,
        rows,
    })
}

//! Stats repository backed by a fixed in-memory snapshot.

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

/// Serves a fixed list of link records.
///
/// [`SampleStatsRepository::new`] loads the three illustrative links shown on
/// the statistics page until a real analytics backend exists.
/// [`SampleStatsRepository::with_records`] serves any other snapshot.
pub struct SampleStatsRepository {
    records: Vec<LinkRecord>,
}

impl SampleStatsRepository {
    pub fn new() -> Self {
        Self::with_records(sample_records())
    }

    pub fn with_records(records: Vec<LinkRecord>) -> Self {
        Self { records }
    }
}

impl Default for SampleStatsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsRepository for SampleStatsRepository {
    async fn fetch_all(&self) -> Result<Vec<LinkRecord>, AppError> {
        Ok(self.records.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.records.iter().find(|r| r.short_code == code).cloned())
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn sample_records() -> Vec<LinkRecord> {
    vec![
        LinkRecord::new(
            1,
            "https://www.example.com/very/long/path/to/some/resource".to_string(),
            "abc123".to_string(),
            utc(2024, 1, 15, 10, 30),
        )
        .with_clicks(47)
        .with_last_clicked(utc(2024, 1, 20, 15, 45))
        .with_location("United States"),
        LinkRecord::new(
            2,
            "https://github.com/user/repository/blob/main/README.md".to_string(),
            "def456".to_string(),
            utc(2024, 1, 18, 14, 20),
        )
        .with_clicks(23)
        .with_last_clicked(utc(2024, 1, 19, 9, 12))
        .with_location("Canada"),
        LinkRecord::new(
            3,
            "https://docs.example.com/api/v1/documentation/getting-started".to_string(),
            "ghi789".to_string(),
            utc(2024, 1, 12, 8, 15),
        )
        .with_clicks(156)
        .with_last_clicked(utc(2024, 1, 21, 11, 30))
        .with_location("United Kingdom"),
    ]
}

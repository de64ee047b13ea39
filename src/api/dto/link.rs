//! JSON representation of a link record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::domain::entities::LinkRecord;

/// A link as the browser front end expects it.
///
/// Keys are camelCase; `lastClicked` and `location` are omitted until the
/// tracking collaborator has set them.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDto {
    pub id: u64,
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl LinkDto {
    /// Converts a record, computing its short URL from `base_url`.
    pub fn from_record(record: &LinkRecord, base_url: &str) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url.clone(),
            short_url: record.short_url(base_url),
            short_code: record.short_code.clone(),
            clicks: record.clicks,
            created_at: record.created_at,
            last_clicked: record.last_clicked,
            location: record.location.clone(),
        }
    }
}

//! Summary metrics derived from a collection of link records.
//!
//! Every function here is pure: same input, same output, no state.

use serde::Serialize;

use crate::domain::entities::LinkRecord;

/// Sum of `clicks` over all records; 0 when empty.
pub fn total_clicks(records: &[LinkRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |sum, r| sum.saturating_add(r.clicks))
}

/// Mean clicks per record rounded half up; 0 when empty.
pub fn average_clicks(records: &[LinkRecord]) -> u64 {
    let count = records.len() as u64;
    if count == 0 {
        return 0;
    }

    let total = total_clicks(records);
    // Half-up rounding in integers; never overflows for large totals.
    total / count + u64::from(total % count >= count.div_ceil(2))
}

/// Every supplied record counts as active.
pub fn active_link_count(records: &[LinkRecord]) -> usize {
    records.len()
}

/// All derived metrics for one snapshot of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_urls: usize,
    pub total_clicks: u64,
    pub average_clicks: u64,
    pub active_links: usize,
}

impl StatsSummary {
    pub fn from_records(records: &[LinkRecord]) -> Self {
        Self {
            total_urls: records.len(),
            total_clicks: total_clicks(records),
            average_clicks: average_clicks(records),
            active_links: active_link_count(records),
        }
    }
}

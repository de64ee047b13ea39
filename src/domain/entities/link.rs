//! Link record entity representing one shortened URL.

use chrono::{DateTime, Utc};

/// A shortened URL with its click metadata.
///
/// `original_url`, `short_code`, `id` and `created_at` are fixed when the
/// record is created. `clicks`, `last_clicked` and `location` belong to the
/// click-tracking collaborator. The short URL is not stored; see
/// [`LinkRecord::short_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: u64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl LinkRecord {
    /// Creates a record with no clicks and no tracking metadata.
    pub fn new(
        id: u64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            clicks: 0,
            created_at,
            last_clicked: None,
            location: None,
        }
    }

    /// Sets the click count.
    pub fn with_clicks(mut self, clicks: u64) -> Self {
        self.clicks = clicks;
        self
    }

    /// Sets the time of the most recent click.
    pub fn with_last_clicked(mut self, at: DateTime<Utc>) -> Self {
        self.last_clicked = Some(at);
        self
    }

    /// Sets the location of the most recent click.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builds the public short URL by appending the code to `base_url`.
    ///
    /// A trailing slash on the base is ignored, so `https://short.ly` and
    /// `https://short.ly/` give the same result.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.short_code)
    }

    /// Registers one click. The counter saturates instead of wrapping.
    pub fn register_click(&mut self, at: DateTime<Utc>, location: Option<String>) {
        self.clicks = self.clicks.saturating_add(1);
        self.last_clicked = Some(at);
        if location.is_some() {
            self.location = location;
        }
    }
}

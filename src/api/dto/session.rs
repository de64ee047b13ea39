//! DTOs for session endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::dto::link::LinkDto;

/// Response to `POST /api/sessions`.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    /// Maximum number of links the session may hold.
    pub capacity: usize,
}

/// Links held by one session.
#[derive(Debug, Serialize)]
pub struct SessionLinksResponse {
    pub size: usize,
    pub capacity: usize,
    /// True while a submission on this session has not settled.
    pub pending: bool,
    pub items: Vec<LinkDto>,
}

//! DTOs for link submission endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::link::LinkDto;

/// Request to shorten one URL.
///
/// Emptiness and format are part of the submission workflow and are reported
/// as rejections, so only the length limit is checked here.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,
}

/// Settled outcome of a submission.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ShortenResponse {
    Accepted { link: LinkDto },
    Rejected { code: &'static str, reason: String },
}

//! # QuickLink
//!
//! A small URL shortener built with Axum. Each visitor session owns a
//! registry of at most five short links; a statistics page summarizes click
//! counts over a stats source.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link records, the registry, the submission
//!   workflow and the statistics aggregator
//! - **Application Layer** ([`application`]) - Session lifecycle and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - Stats source implementations
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Quick Start
//!
//! ```bash
//! export SUBMIT_LATENCY_MS=1000
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Session, SessionService, StatsService};
    pub use crate::domain::entities::LinkRecord;
    pub use crate::domain::registry::{LinkRegistry, MAX_LINKS};
    pub use crate::domain::submission::{Outcome, SubmissionError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

//! Application layer services implementing business logic.
//!
//! Services coordinate domain rules and repository calls and give HTTP
//! handlers, templates and the CLI a single API to work against.
//!
//! # Available Services
//!
//! - [`services::session_service::SessionService`] - Session lifecycle and link submission
//! - [`services::stats_service::StatsService`] - Statistics page data

pub mod services;

//! Business logic services for the application layer.

pub mod session_service;
pub mod stats_service;

pub use session_service::{
    Session, SessionError, SessionService, SubmissionState, run_session_sweeper,
};
pub use stats_service::{StatsReport, StatsService};

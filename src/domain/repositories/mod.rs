//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data retrieval; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for testing.
//!
//! - [`StatsRepository`] - Link records feeding the statistics page

pub mod stats_repository;

pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use stats_repository::MockStatsRepository;

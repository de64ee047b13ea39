//! In-memory data sources.
//!
//! - [`SampleStatsRepository`] - Fixed link records for the statistics page

mod sample_stats_repository;

pub use sample_stats_repository::SampleStatsRepository;

//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{SessionService, StatsService};
use crate::config::Config;
use crate::infrastructure::sample::SampleStatsRepository;
use crate::utils::code_generator::RandomCodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub stats_service: Arc<StatsService<SampleStatsRepository>>,
    /// Prefix joined with a short code to build its short URL.
    pub short_base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        session_service: Arc<SessionService>,
        stats_service: Arc<StatsService<SampleStatsRepository>>,
        short_base_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            session_service,
            stats_service,
            short_base_url: short_base_url.into(),
        }
    }

    /// Wires production services from configuration.
    pub fn from_config(config: &Config) -> Self {
        let session_service = Arc::new(SessionService::new(
            Arc::new(RandomCodeGenerator),
            config.submit_latency(),
            config.max_sessions,
            config.session_idle_timeout(),
        ));
        let stats_service = Arc::new(StatsService::new(Arc::new(SampleStatsRepository::new())));

        Self::new(
            session_service,
            stats_service,
            config.short_base_url.as_str(),
        )
    }
}

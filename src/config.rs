//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export SHORT_BASE_URL="https://short.ly/"
//! export SUBMIT_LATENCY_MS="1000"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_BASE_URL` - Prefix of every generated short URL (default: `https://short.ly/`)
//! - `SUBMIT_LATENCY_MS` - Simulated processing delay per submission (default: 1000, max: 60000)
//! - `MAX_SESSIONS` - Upper bound on live sessions (default: 10000, min: 1)
//! - `SESSION_IDLE_TIMEOUT_SECS` - Idle time before a session is evicted (default: 1800, min: 1)

use anyhow::Result;
use std::env;
use std::time::Duration;
use url::Url;

/// Default prefix for generated short URLs.
pub const DEFAULT_SHORT_BASE_URL: &str = "https://short.ly/";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Prefix joined with each short code to form the short URL.
    pub short_base_url: String,
    /// Delay applied to every valid submission before the registry is updated.
    pub submit_latency_ms: u64,
    /// Maximum number of live sessions, each owning one link registry.
    pub max_sessions: usize,
    /// Seconds a session may go unused before it is evicted.
    pub session_idle_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            short_base_url: DEFAULT_SHORT_BASE_URL.to_string(),
            submit_latency_ms: 1000,
            max_sessions: 10_000,
            session_idle_timeout_secs: 1800,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let short_base_url = env::var("SHORT_BASE_URL").unwrap_or(defaults.short_base_url);

        let submit_latency_ms = env::var("SUBMIT_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.submit_latency_ms);

        let max_sessions = env::var("MAX_SESSIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_sessions);

        let session_idle_timeout_secs = env::var("SESSION_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.session_idle_timeout_secs);

        Self {
            listen_addr,
            log_level,
            log_format,
            short_base_url,
            submit_latency_ms,
            max_sessions,
            session_idle_timeout_secs,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `short_base_url` is not an absolute http(s) URL
    /// - `submit_latency_ms` exceeds 60000
    /// - `max_sessions` is 0
    /// - `session_idle_timeout_secs` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match Url::parse(&self.short_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => anyhow::bail!(
                "SHORT_BASE_URL must be an absolute http(s) URL, got '{}'",
                self.short_base_url
            ),
        }

        if self.submit_latency_ms > 60_000 {
            anyhow::bail!(
                "SUBMIT_LATENCY_MS is too large (max: 60000), got {}",
                self.submit_latency_ms
            );
        }

        if self.max_sessions == 0 {
            anyhow::bail!("MAX_SESSIONS must be at least 1");
        }

        if self.session_idle_timeout_secs == 0 {
            anyhow::bail!("SESSION_IDLE_TIMEOUT_SECS must be at least 1");
        }

        Ok(())
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    /// How often idle sessions are swept: the idle timeout, capped at one minute.
    pub fn session_sweep_interval(&self) -> Duration {
        self.session_idle_timeout().min(Duration::from_secs(60))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short base URL: {}", self.short_base_url);
        tracing::info!("  Submit latency: {}ms", self.submit_latency_ms);
        tracing::info!("  Max sessions: {}", self.max_sessions);
        tracing::info!("  Session idle timeout: {}s", self.session_idle_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

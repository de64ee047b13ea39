//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod sessions;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use sessions::{
    create_session_handler, destroy_session_handler, session_links_handler,
    session_stats_handler,
};
pub use shorten::shorten_handler;
pub use stats::{link_stats_handler, stats_handler};

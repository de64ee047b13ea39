//! HTML template rendering handlers.

mod index;
mod not_found;
mod statistics;

pub use index::index_handler;
pub use not_found::not_found_handler;
pub use statistics::statistics_handler;

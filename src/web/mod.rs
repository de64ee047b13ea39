//! Web layer for browser-based UI.
//!
//! Provides the landing and statistics pages plus the 404 page.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;

//! Infrastructure layer for data sources.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`sample`] - In-memory repositories serving fixed data

pub mod sample;

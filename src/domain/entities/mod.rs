//! Core domain entities.
//!
//! - [`LinkRecord`] - A shortened URL with its click metadata
//!
//! Entities are plain data structures; the rules that govern them live in
//! [`crate::domain::registry`] and [`crate::domain::submission`].

pub mod link;

pub use link::LinkRecord;

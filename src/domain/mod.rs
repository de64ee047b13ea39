//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`registry`] - Session-scoped link registry with the five-link cap
//! - [`submission`] - Validation and admission of submitted URLs
//! - [`statistics`] - Pure summary metrics over link records
//! - [`repositories`] - Data access trait definitions
//!
//! # Submission Flow
//!
//! 1. Raw input is trimmed and checked for emptiness
//! 2. The text is validated as an absolute URL
//! 3. [`registry::LinkRegistry::add`] enforces the cap and assigns a unique code
//! 4. The caller receives a [`submission::Outcome`]
//!
//! The domain layer has no dependency on HTTP or templates.

pub mod entities;
pub mod registry;
pub mod repositories;
pub mod statistics;
pub mod submission;

//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Fail-open caching over Redis
//! - [`outline`] - HTTP client for the upstream Outline API
//! - [`redirects`] - Legacy redirect table loading

pub mod cache;
pub mod outline;
pub mod redirects;

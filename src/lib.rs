//! # Outline Mirror
//!
//! A read-only website that mirrors one Outline collection, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Content entities and the content source trait
//! - **Application Layer** ([`application`]) - Content retrieval, rendering, sitemap, legacy redirects
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache, Outline API client, CSV loading
//! - **API Layer** ([`api`]) - Health endpoint and request tracing
//! - **Web Layer** ([`web`]) - HTML pages rendered with Askama
//!
//! ## Features
//!
//! - Fail-open Redis caching of every upstream call, with per-content-type TTLs
//! - Permanent redirects from legacy URLs to their new pages
//! - Private pages (`[private]` in the title) hidden from navigation and sitemap
//!
//! ## Quick Start
//!
//! ```bash
//! export OUTLINE_API_KEY="ol_api_..."
//! export OUTLINE_COLLECTION_ID="..."
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ContentService, LegacyUrlResolver, RenderService, SitemapService,
    };
    pub use crate::domain::entities::{Collection, Document, NavigationTree, RedirectMapping};
    pub use crate::domain::repositories::{ContentError, ContentSource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, ContentType};
    pub use crate::state::{AppState, SiteSettings};
}

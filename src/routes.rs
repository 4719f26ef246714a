//! Top-level router configuration combining page, API and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Collection overview
//! - `GET  /doc/{id}`     - Document page
//! - `GET  /search`       - Search
//! - `GET  /sitemap.xml`  - Sitemap
//! - `GET  /health`       - Health check: cache, redirect table
//! - `/stylesheets/*`     - Static assets from the static directory
//! - anything else        - Legacy redirect (301) or not-found page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::handler::Handler;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for paths no route matches; missing
///   files and directories fall through to legacy redirect resolution
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(site_router(state, static_dir))
}

/// The routes of [`app_router`] without path normalization.
pub fn site_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Directories are not listed or redirected to `dir/`; trailing slashes
    // are trimmed by `app_router`, so a redirect would never settle.
    let fallback = ServeDir::new(static_dir.as_ref())
        .append_index_html_on_directories(false)
        .fallback(not_found_handler.with_state(state.clone()));

    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .fallback_service(fallback)
        .with_state(state)
        .layer(tracing::layer())
}

//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{document_handler, home_handler, search_handler, sitemap_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Collection overview
/// - `GET /doc/{id}` - Document page
/// - `GET /search` - Search form and results
/// - `GET /sitemap.xml` - Sitemap
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/doc/{id}", get(document_handler))
        .route("/search", get(search_handler))
        .route("/sitemap.xml", get(sitemap_handler))
}

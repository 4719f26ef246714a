//! API route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Operational routes.
///
/// # Endpoints
///
/// - `GET /health` - Service health with cache and redirect table checks
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

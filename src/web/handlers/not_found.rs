//! Fallback handler: legacy URL redirects and the not-found page.

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Builds a `301 Moved Permanently` response.
pub fn moved_permanently(location: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Handles every path no route matched.
///
/// Paths with a legacy mapping are redirected permanently to their new
/// location; everything else gets the not-found page.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match state.resolver.get_redirect_url(uri.path()) {
        Some(target) => {
            info!(from = %uri.path(), to = %target, "Redirecting legacy URL");
            moved_permanently(&target)
        }
        None => AppError::not_found(format!("No route for {}", uri.path())).into_response(),
    }
}

//! Sitemap handler.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::AppError;
use crate::state::AppState;

/// Serves the sitemap of all visible pages.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
pub async fn sitemap_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let xml = state.sitemap.sitemap_xml().await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

//! Home page handler.

use axum::{extract::State, response::IntoResponse};

use super::{DocumentTemplate, meta_description};
use crate::error::AppError;
use crate::state::AppState;

/// Renders the collection overview.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let collection = state.content.collection().await?;
    let navigation = state.content.navigation().await?;

    Ok(DocumentTemplate {
        title: state.site.title.clone(),
        description: meta_description(collection.description_markdown()),
        body_html: state
            .renderer
            .render(collection.description_markdown())
            .await,
        navigation_html: navigation.render_html(None),
        children: Vec::new(),
        edit_url: state.renderer.edit_url(&collection.edit_path()),
        updated_on: collection
            .updated_at
            .map(|updated_at| updated_at.format("%-d %B %Y").to_string()),
    })
}

//! Document page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::{IntoResponse, Response},
};
use tracing::info;

use super::moved_permanently;
use crate::application::services::excerpt;
use crate::domain::entities::NavEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Link to a page listed under the current document.
pub struct ChildLink {
    pub title: String,
    pub url: String,
}

impl From<&NavEntry> for ChildLink {
    fn from(entry: &NavEntry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.url.clone(),
        }
    }
}

/// Plain-text page summary for `<meta name="description">`, on one line.
pub fn meta_description(markdown: &str) -> String {
    excerpt(markdown)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Template shared by the home page and document pages.
#[derive(Template, WebTemplate)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub title: String,
    pub description: String,
    pub body_html: String,
    pub navigation_html: String,
    pub children: Vec<ChildLink>,
    pub edit_url: String,
    pub updated_on: Option<String>,
}

/// Renders a single document with navigation.
///
/// # Endpoint
///
/// `GET /doc/{id}`
///
/// # Errors
///
/// A document the upstream does not know is looked up in the legacy
/// redirect table first; without a match the not-found page is returned.
/// Any other upstream failure renders the error page.
pub async fn document_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Response, AppError> {
    let document = match state.content.document(&id).await {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            if let Some(target) = state.resolver.get_redirect_url(uri.path()) {
                info!(from = %uri.path(), to = %target, "Redirecting legacy document URL");
                return Ok(moved_permanently(&target));
            }
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let navigation = state.content.navigation().await?;
    let children = navigation
        .children_of(&document.id)
        .into_iter()
        .filter(|entry| !entry.is_private())
        .map(ChildLink::from)
        .collect();

    let page = DocumentTemplate {
        description: meta_description(&document.text),
        body_html: state.renderer.render(&document.text).await,
        navigation_html: navigation.render_html(Some(&document.id)),
        children,
        edit_url: state.renderer.edit_url(&document.edit_path()),
        updated_on: document
            .updated_at
            .map(|updated_at| updated_at.format("%-d %B %Y").to_string()),
        title: document.title,
    };

    Ok(page.into_response())
}

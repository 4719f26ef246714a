//! Search page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::SearchResult;
use crate::error::AppError;
use crate::state::AppState;

/// Query string of the search page. `q` is accepted as an alias of `query`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(max = 200, message = "Search query is too long"))]
    pub query: Option<String>,
    #[validate(length(max = 200, message = "Search query is too long"))]
    pub q: Option<String>,
}

impl SearchParams {
    /// The search term, preferring `query` over `q`.
    pub fn term(&self) -> &str {
        self.query
            .as_deref()
            .or(self.q.as_deref())
            .unwrap_or_default()
            .trim()
    }
}

/// One search result as shown on the page.
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub context: String,
}

impl From<SearchResult> for SearchHit {
    fn from(result: SearchResult) -> Self {
        Self {
            url: format!("/doc/{}", result.document.id),
            title: result.document.title,
            context: result.context,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub title: String,
    pub query: String,
    pub searched: bool,
    pub results: Vec<SearchHit>,
}

/// Renders the search form and, for a non-empty query, its results.
///
/// # Endpoint
///
/// `GET /search?query=...` (or `?q=...`)
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let query = params.term().to_string();
    if query.is_empty() {
        return Ok(SearchTemplate {
            title: "Search".to_string(),
            query,
            searched: false,
            results: Vec::new(),
        });
    }

    let results = state
        .content
        .search(&query)
        .await?
        .into_iter()
        .map(SearchHit::from)
        .collect();

    Ok(SearchTemplate {
        title: "Search results".to_string(),
        query,
        searched: true,
        results,
    })
}

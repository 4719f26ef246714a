//! Document and collection entities as returned by the upstream API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single published document.
///
/// `text` holds the raw markdown body; rendering happens in
/// [`crate::application::services::RenderService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Upstream path of the document editor, relative to the upstream origin.
    pub fn edit_path(&self) -> String {
        format!("{}/edit", self.url)
    }
}

/// The collection mirrored by the site; rendered as the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Collection {
    /// Upstream path of the collection overview editor.
    pub fn edit_path(&self) -> String {
        format!("{}/overview", self.url)
    }

    /// Markdown body of the collection overview (empty when unset).
    pub fn description_markdown(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

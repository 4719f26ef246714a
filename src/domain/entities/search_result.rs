//! Search hit returned by the upstream full-text search.

use serde::{Deserialize, Serialize};

use super::Document;

/// One search hit: the matching document plus a highlighted context snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub context: String,
    pub document: Document,
}

//! Repository trait for upstream content access.

use async_trait::async_trait;

use crate::domain::entities::{Collection, Document, NavigationNode, SearchResult};

/// Errors produced while retrieving upstream content.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// The upstream API reports that the resource does not exist (or is not visible).
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The upstream API answered with an unexpected status.
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Decode(String),

    /// An attachment lookup did not answer with a redirect.
    #[error("attachment {0} did not resolve to a redirect")]
    MissingRedirect(String),
}

impl ContentError {
    /// Returns true if the error means "no such content" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read-only access to the mirrored collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::outline::OutlineClient`] - HTTP client for the Outline API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches a single document by id or url id.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if the document does not exist.
    async fn get_document(&self, id: &str) -> Result<Document, ContentError>;

    /// Fetches the configured collection.
    async fn get_collection(&self) -> Result<Collection, ContentError>;

    /// Fetches the document tree of the configured collection.
    async fn get_collection_structure(&self) -> Result<Vec<NavigationNode>, ContentError>;

    /// Full-text search restricted to published documents of the collection.
    async fn search_documents(&self, query: &str) -> Result<Vec<SearchResult>, ContentError>;

    /// Resolves an attachment id to its (signed) download URL.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MissingRedirect`] if the upstream does not redirect.
    async fn get_attachment_url(&self, attachment_id: &str) -> Result<String, ContentError>;
}

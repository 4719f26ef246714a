//! HTTP client for the Outline API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use crate::domain::entities::{Collection, Document, NavigationNode, SearchResult};
use crate::domain::repositories::{ContentError, ContentSource};

/// Default Outline API base.
pub const DEFAULT_API_URL: &str = "https://app.getoutline.com/api";

/// Longest upstream error message kept in a [`ContentError`].
const MAX_ERROR_MESSAGE: usize = 200;

/// Connection settings for [`OutlineClient`].
#[derive(Debug, Clone)]
pub struct OutlineSettings {
    pub api_url: String,
    pub api_key: String,
    pub collection_id: String,
    pub timeout: Duration,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Outline API client scoped to one collection.
///
/// Every call is a `POST {api_url}/{endpoint}` with a bearer token and a
/// JSON body. Redirects are never followed so that attachment lookups can
/// read the `Location` header.
#[derive(Clone)]
pub struct OutlineClient {
    http: Client,
    api_url: String,
    api_key: String,
    collection_id: String,
}

impl OutlineClient {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Transport`] if the HTTP client cannot be built
    /// (e.g., TLS backend initialization failure).
    pub fn new(settings: OutlineSettings) -> Result<Self, ContentError> {
        let http = Client::builder()
            .user_agent(concat!("outline-mirror/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            collection_id: settings.collection_id,
        })
    }

    /// Identifier of the mirrored collection.
    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    async fn post(&self, endpoint: &str, body: Value) -> Result<Response, ContentError> {
        debug!("Outline request: {} {}", endpoint, body);

        self.http
            .post(format!("{}/{}", self.api_url, endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))
    }

    /// Posts to `endpoint` and decodes the `data` member of a 2xx reply.
    async fn fetch_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        resource: &str,
        body: Value,
    ) -> Result<T, ContentError> {
        let response = self.post(endpoint, body).await?;

        if !response.status().is_success() {
            return Err(status_error(response, resource).await);
        }

        response
            .json::<Envelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ContentError::Decode(format!("{}: {}", endpoint, e)))
    }
}

/// Maps a non-success response to a [`ContentError`].
async fn status_error(response: Response, resource: &str) -> ContentError {
    let status = response.status();

    if matches!(status, StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST) {
        return ContentError::NotFound {
            resource: resource.to_string(),
        };
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or(text);

    ContentError::Status {
        status: status.as_u16(),
        message: message.chars().take(MAX_ERROR_MESSAGE).collect(),
    }
}

#[async_trait]
impl ContentSource for OutlineClient {
    async fn get_document(&self, id: &str) -> Result<Document, ContentError> {
        self.fetch_data(
            "documents.info",
            &format!("document {}", id),
            json!({ "id": id }),
        )
        .await
    }

    async fn get_collection(&self) -> Result<Collection, ContentError> {
        self.fetch_data(
            "collections.info",
            &format!("collection {}", self.collection_id),
            json!({ "id": self.collection_id }),
        )
        .await
    }

    async fn get_collection_structure(&self) -> Result<Vec<NavigationNode>, ContentError> {
        self.fetch_data(
            "collections.documents",
            &format!("collection {}", self.collection_id),
            json!({ "id": self.collection_id }),
        )
        .await
    }

    async fn search_documents(&self, query: &str) -> Result<Vec<SearchResult>, ContentError> {
        self.fetch_data(
            "documents.search",
            "search results",
            json!({
                "query": query,
                "collectionId": self.collection_id,
                "statusFilter": ["published"],
            }),
        )
        .await
    }

    async fn get_attachment_url(&self, attachment_id: &str) -> Result<String, ContentError> {
        let response = self
            .post("attachments.redirect", json!({ "id": attachment_id }))
            .await?;
        let status = response.status();

        if status.is_redirection() {
            return response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .ok_or_else(|| ContentError::MissingRedirect(attachment_id.to_string()));
        }

        if status.is_success() {
            return Err(ContentError::MissingRedirect(attachment_id.to_string()));
        }

        Err(status_error(response, &format!("attachment {}", attachment_id)).await)
    }
}

//! Cached access to upstream content.

use std::sync::Arc;

use crate::domain::entities::{Collection, Document, NavigationTree, SearchResult};
use crate::domain::repositories::{ContentError, ContentSource};
use crate::infrastructure::cache::{CacheService, ContentType};

/// Retrieves documents, the collection, its structure, search results and
/// attachment URLs, consulting the cache for every upstream call.
///
/// Upstream errors are never cached.
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    cache: Arc<CacheService>,
    collection_id: String,
}

impl ContentService {
    /// Creates a new content service.
    ///
    /// `collection_id` scopes the cache keys of collection-wide calls.
    pub fn new(
        source: Arc<dyn ContentSource>,
        cache: Arc<CacheService>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            cache,
            collection_id: collection_id.into(),
        }
    }

    /// Fetches a document by id.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if the document does not exist.
    pub async fn document(&self, id: &str) -> Result<Document, ContentError> {
        self.cache
            .fetch(&format!("document:{}", id), ContentType::Document, || {
                self.source.get_document(id)
            })
            .await
    }

    /// Fetches the mirrored collection (home page content).
    pub async fn collection(&self) -> Result<Collection, ContentError> {
        self.cache
            .fetch(
                &format!("collection:{}", self.collection_id),
                ContentType::Document,
                || self.source.get_collection(),
            )
            .await
    }

    /// Fetches the collection structure as an index-based tree.
    pub async fn navigation(&self) -> Result<NavigationTree, ContentError> {
        let nodes = self
            .cache
            .fetch(
                &format!("collection_structure:{}", self.collection_id),
                ContentType::CollectionStructure,
                || self.source.get_collection_structure(),
            )
            .await?;

        Ok(NavigationTree::from_nodes(nodes))
    }

    /// Searches published documents.
    ///
    /// Blank queries return no results without calling upstream.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ContentError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.cache
            .fetch(
                &format!("search:{}:{}", self.collection_id, query),
                ContentType::Search,
                || self.source.search_documents(query),
            )
            .await
    }

    /// Resolves an attachment id to its download URL.
    pub async fn attachment_url(&self, attachment_id: &str) -> Result<String, ContentError> {
        self.cache
            .fetch(
                &format!("attachment:{}", attachment_id),
                ContentType::Attachment,
                || self.source.get_attachment_url(attachment_id),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NavigationNode;
    use crate::domain::repositories::MockContentSource;
    use crate::infrastructure::cache::{DEFAULT_NAMESPACE, MemoryCache};

    fn test_document(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: format!("Title {}", id),
            text: "# Hello".to_string(),
            url: format!("/doc/title-{}", id),
            updated_at: None,
        }
    }

    fn cached() -> Arc<CacheService> {
        Arc::new(CacheService::new(
            Arc::new(MemoryCache::new()),
            DEFAULT_NAMESPACE,
        ))
    }

    fn uncached() -> Arc<CacheService> {
        Arc::new(CacheService::disabled(DEFAULT_NAMESPACE))
    }

    #[tokio::test]
    async fn test_document_is_served_from_cache_on_second_call() {
        let mut mock_source = MockContentSource::new();
        mock_source
            .expect_get_document()
            .times(1)
            .returning(|id| Ok(test_document(id)));

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        let first = service.document("abc").await.unwrap();
        let second = service.document("abc").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.title, "Title abc");
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let mut mock_source = MockContentSource::new();
        mock_source.expect_get_document().times(2).returning(|id| {
            Err(ContentError::NotFound {
                resource: format!("document {}", id),
            })
        });

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        for _ in 0..2 {
            let err = service.document("missing").await.unwrap_err();
            assert!(err.is_not_found());
        }
    }

    #[tokio::test]
    async fn test_uncached_service_always_calls_upstream() {
        let mut mock_source = MockContentSource::new();
        mock_source
            .expect_get_document()
            .times(2)
            .returning(|id| Ok(test_document(id)));

        let service = ContentService::new(Arc::new(mock_source), uncached(), "col");

        service.document("a").await.unwrap();
        service.document("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_navigation_builds_tree() {
        let mut mock_source = MockContentSource::new();
        mock_source
            .expect_get_collection_structure()
            .times(1)
            .returning(|| {
                Ok(vec![NavigationNode {
                    id: "root".to_string(),
                    title: "Root".to_string(),
                    url: "/doc/root-1".to_string(),
                    updated_at: None,
                    children: vec![NavigationNode {
                        id: "leaf".to_string(),
                        title: "Leaf".to_string(),
                        url: "/doc/leaf-2".to_string(),
                        updated_at: None,
                        children: vec![],
                    }],
                }])
            });

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        let tree = service.navigation().await.unwrap();
        assert_eq!(tree.children_of("root")[0].id, "leaf");

        // second call hits the cache
        let tree = service.navigation().await.unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_search_skips_upstream() {
        let mut mock_source = MockContentSource::new();
        mock_source.expect_search_documents().times(0);

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        assert!(service.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_results_are_recomputed() {
        let mut mock_source = MockContentSource::new();
        mock_source
            .expect_search_documents()
            .times(2)
            .returning(|_| Ok(Vec::new()));

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        service.search("nothing").await.unwrap();
        service.search("nothing").await.unwrap();
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let mut mock_source = MockContentSource::new();
        mock_source
            .expect_search_documents()
            .withf(|query| query == "deploy")
            .times(1)
            .returning(|_| {
                Ok(vec![SearchResult {
                    context: "how to <b>deploy</b>".to_string(),
                    document: test_document("d"),
                }])
            });

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        let results = service.search("  deploy ").await.unwrap();
        assert_eq!(results.len(), 1);
        let cached_results = service.search("deploy").await.unwrap();
        assert_eq!(cached_results, results);
    }

    #[tokio::test]
    async fn test_attachment_url_is_cached() {
        let mut mock_source = MockContentSource::new();
        mock_source
            .expect_get_attachment_url()
            .times(1)
            .returning(|id| Ok(format!("https://files.example.com/{}", id)));

        let service = ContentService::new(Arc::new(mock_source), cached(), "col");

        assert_eq!(
            service.attachment_url("img1").await.unwrap(),
            "https://files.example.com/img1"
        );
        assert_eq!(
            service.attachment_url("img1").await.unwrap(),
            "https://files.example.com/img1"
        );
    }
}

//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{
    ContentService, LegacyUrlResolver, RenderService, SitemapService,
};
use crate::domain::repositories::ContentSource;
use crate::infrastructure::cache::CacheService;

/// Site-wide presentation settings.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Home page title.
    pub title: String,
    /// Public origin of this site.
    pub base_url: String,
    /// Collection mirrored by the site.
    pub collection_id: String,
    /// Upstream web origin, if links to it should be rewritten.
    pub public_url: Option<String>,
}

/// Singleton services shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub renderer: Arc<RenderService>,
    pub sitemap: Arc<SitemapService>,
    pub resolver: Arc<LegacyUrlResolver>,
    pub cache: Arc<CacheService>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    /// Wires the services on top of a content source and a cache.
    pub fn new(
        source: Arc<dyn ContentSource>,
        cache: Arc<CacheService>,
        resolver: LegacyUrlResolver,
        site: SiteSettings,
    ) -> Self {
        let content = Arc::new(ContentService::new(
            source,
            cache.clone(),
            site.collection_id.clone(),
        ));
        let renderer = Arc::new(RenderService::new(content.clone(), site.public_url.clone()));
        let sitemap = Arc::new(SitemapService::new(content.clone(), site.base_url.clone()));

        Self {
            content,
            renderer,
            sitemap,
            resolver: Arc::new(resolver),
            cache,
            site: Arc::new(site),
        }
    }
}

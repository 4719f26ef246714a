//! Sitemap generation for the mirrored collection.

use std::sync::Arc;

use super::ContentService;
use crate::domain::entities::NavigationTree;
use crate::domain::repositories::ContentError;
use crate::utils::markup::escape_markup;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Service for generating `sitemap.xml`.
#[derive(Clone)]
pub struct SitemapService {
    content: Arc<ContentService>,
    base_url: String,
}

impl SitemapService {
    pub fn new(content: Arc<ContentService>, base_url: impl Into<String>) -> Self {
        Self {
            content,
            base_url: base_url.into(),
        }
    }

    /// Generates sitemap.xml from the current collection structure.
    pub async fn sitemap_xml(&self) -> Result<String, ContentError> {
        let tree = self.content.navigation().await?;
        Ok(build_sitemap(&self.base_url, &tree))
    }
}

/// Renders the sitemap for a navigation tree.
///
/// Lists the home page, the search page and every visible document in
/// depth-first order.
pub fn build_sitemap(base_url: &str, tree: &NavigationTree) -> String {
    let base = base_url.trim_end_matches('/');

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

    xml.push_str(&url_entry(&format!("{}/", base), None));
    xml.push_str(&url_entry(&format!("{}/search", base), None));

    for page in tree.visible_pages() {
        let lastmod = page
            .updated_at
            .map(|updated_at| updated_at.format("%Y-%m-%d").to_string());
        xml.push_str(&url_entry(
            &format!("{}/doc/{}", base, page.id),
            lastmod.as_deref(),
        ));
    }

    xml.push_str("</urlset>");
    xml
}

fn url_entry(loc: &str, lastmod: Option<&str>) -> String {
    let mut entry = String::from("  <url>\n");
    entry.push_str(&format!("    <loc>{}</loc>\n", escape_markup(loc)));
    if let Some(lastmod) = lastmod {
        entry.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
    }
    entry.push_str("  </url>\n");
    entry
}

//! Application layer services implementing the site's behavior.
//!
//! Services consume the domain's repository traits and the cache
//! infrastructure and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::content_service::ContentService`] - Cached upstream content retrieval
//! - [`services::render_service::RenderService`] - Markdown to page HTML
//! - [`services::sitemap_service::SitemapService`] - sitemap.xml generation
//! - [`services::legacy_url_resolver::LegacyUrlResolver`] - Old URL to new path mapping

pub mod services;

//! Business logic services for the application layer.

pub mod content_service;
pub mod legacy_url_resolver;
pub mod render_service;
pub mod sitemap_service;

pub use content_service::ContentService;
pub use legacy_url_resolver::{LegacyUrlResolver, extract_redirect_path};
pub use render_service::{RenderService, excerpt};
pub use sitemap_service::{SitemapService, build_sitemap};

//! HTML page handlers for the mirrored site.

mod document;
mod home;
mod not_found;
mod search;
mod sitemap;

pub use document::{ChildLink, DocumentTemplate, document_handler, meta_description};
pub use home::home_handler;
pub use not_found::{moved_permanently, not_found_handler};
pub use search::{SearchHit, SearchParams, SearchTemplate, search_handler};
pub use sitemap::sitemap_handler;

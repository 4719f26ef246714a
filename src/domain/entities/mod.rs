//! Domain entities: typed views of upstream content and redirect records.

mod document;
mod navigation;
mod redirect_mapping;
mod search_result;

pub use document::{Collection, Document};
pub use navigation::{NavEntry, NavigationNode, NavigationTree, PRIVATE_MARKER};
pub use redirect_mapping::RedirectMapping;
pub use search_result::SearchResult;

//! Repository trait definitions for the domain layer.
//!
//! The content source abstracts the upstream knowledge base. The HTTP
//! implementation lives in `crate::infrastructure::outline`; a mock is
//! generated via `mockall` for testing.

pub mod content_source;

pub use content_source::{ContentError, ContentSource};

#[cfg(test)]
pub use content_source::MockContentSource;

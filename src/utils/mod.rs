//! Small helpers shared across layers.
//!
//! - [`path_normalizer`] - Canonical request paths for redirect matching
//! - [`markup`] - HTML/XML text escaping

pub mod markup;
pub mod path_normalizer;

//! Resolution of retired URLs to current document paths.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::domain::entities::RedirectMapping;
use crate::infrastructure::redirects::load_mappings;
use crate::utils::path_normalizer::normalize_path;

/// A `/doc/` path ending in `-<alphanumeric id>` at the end of the URL.
static DOC_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/doc/.*?-[a-zA-Z0-9]+$").expect("doc path regex is valid"));

/// Extracts the on-site document path from a mapping's `new_url`.
///
/// # Examples
///
/// ```
/// use outline_mirror::application::services::extract_redirect_path;
///
/// assert_eq!(
///     extract_redirect_path("https://host/doc/getting-started-abc123"),
///     Some("/doc/getting-started-abc123")
/// );
/// assert_eq!(extract_redirect_path("https://host/doc/overview"), None);
/// ```
pub fn extract_redirect_path(new_url: &str) -> Option<&str> {
    DOC_PATH.find(new_url).map(|m| m.as_str())
}

struct IndexedMapping {
    normalized_old_url: String,
    mapping: RedirectMapping,
}

/// Maps legacy paths to current document paths.
///
/// The table is immutable after construction, so a single instance can be
/// shared across request handlers without locking.
///
/// # Matching
///
/// 1. Exact: the first record whose normalized `old_url` equals the
///    normalized input.
/// 2. Partial: otherwise, the first record (in load order) where either
///    normalized path contains the other.
pub struct LegacyUrlResolver {
    entries: Vec<IndexedMapping>,
}

impl LegacyUrlResolver {
    /// Creates a resolver over `mappings`, keeping their order.
    pub fn new(mappings: Vec<RedirectMapping>) -> Self {
        let entries = mappings
            .into_iter()
            .map(|mapping| IndexedMapping {
                normalized_old_url: normalize_path(&mapping.old_url),
                mapping,
            })
            .collect();

        Self { entries }
    }

    /// Creates a resolver without mappings.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Loads the mapping table from a CSV file.
    ///
    /// Never fails: a missing or unreadable file yields an empty resolver.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!(
                "No redirect mapping file at {}; legacy redirects disabled",
                path.display()
            );
            return Self::empty();
        }

        match load_mappings(path) {
            Ok(loaded) => {
                info!(
                    "Loaded {} redirect mappings from {} ({} rows skipped)",
                    loaded.mappings.len(),
                    path.display(),
                    loaded.skipped
                );
                Self::new(loaded.mappings)
            }
            Err(e) => {
                warn!("Error loading redirect mappings: {}", e);
                Self::empty()
            }
        }
    }

    /// Number of loaded mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All mappings in load order.
    pub fn mappings(&self) -> impl Iterator<Item = &RedirectMapping> {
        self.entries.iter().map(|entry| &entry.mapping)
    }

    /// Finds the mapping for a (possibly legacy) path.
    ///
    /// Returns `None` when no record matches.
    pub fn find_mapping(&self, path: &str) -> Option<&RedirectMapping> {
        let normalized = normalize_path(path);

        let exact = self
            .entries
            .iter()
            .find(|entry| entry.normalized_old_url == normalized);

        exact
            .or_else(|| {
                self.entries.iter().find(|entry| {
                    entry.normalized_old_url.contains(normalized.as_str())
                        || normalized.contains(entry.normalized_old_url.as_str())
                })
            })
            .map(|entry| &entry.mapping)
    }

    /// Returns the current document path for a legacy path.
    ///
    /// `None` when no mapping matches, or when the matched mapping's
    /// `new_url` does not contain a `/doc/<slug>-<id>` path.
    pub fn get_redirect_url(&self, path: &str) -> Option<String> {
        self.find_mapping(path)
            .and_then(|mapping| extract_redirect_path(&mapping.new_url))
            .map(str::to_string)
    }
}

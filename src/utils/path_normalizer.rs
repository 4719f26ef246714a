//! Request path normalization for legacy URL matching.
//!
//! Collapses the spellings a historical link may arrive in (absolute URL,
//! missing leading slash, trailing slash) into one canonical path form.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a leading `scheme://host` prefix (any scheme, host up to the first `/`).
static ORIGIN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/]*").expect("origin prefix regex is valid")
});

/// Normalizes a path or URL to a canonical, origin-free path.
///
/// # Normalization Rules
///
/// 1. **Empty input**: returns an empty string
/// 2. **Origin**: a leading `scheme://host` prefix is removed
/// 3. **Trailing slash**: removed
/// 4. **Leading slash**: exactly one is present
///
/// The result is a fixed point: normalizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use outline_mirror::utils::path_normalizer::normalize_path;
///
/// assert_eq!(normalize_path("https://x.com/a/b/"), "/a/b");
/// assert_eq!(normalize_path("a/b"), "/a/b");
/// assert_eq!(normalize_path(""), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let without_origin = ORIGIN_PREFIX.replace(input, "");
    let trimmed = without_origin.trim_end_matches('/').trim_start_matches('/');

    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_equivalent_spellings() {
        let variants = [
            "/a/b",
            "/a/b/",
            "a/b",
            "http://host/a/b",
            "https://host/a/b/",
        ];

        for variant in variants {
            assert_eq!(normalize_path(variant), "/a/b", "variant: {}", variant);
        }
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("https://example.com"), "/");
        assert_eq!(normalize_path("https://example.com/"), "/");
    }

    #[test]
    fn test_normalize_keeps_path_case() {
        assert_eq!(normalize_path("/Guides/Setup"), "/Guides/Setup");
    }

    #[test]
    fn test_normalize_keeps_query_string() {
        assert_eq!(
            normalize_path("https://old.example.com/page?ref=nav"),
            "/page?ref=nav"
        );
    }

    #[test]
    fn test_normalize_strips_host_with_port() {
        assert_eq!(normalize_path("http://localhost:4567/a/b"), "/a/b");
    }

    #[test]
    fn test_normalize_repeated_slashes_at_edges() {
        assert_eq!(normalize_path("//a/b//"), "/a/b");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "/",
            "//",
            "a",
            "/a/b/",
            "a//",
            "https://host",
            "https://host/a/b/",
            "ftp://files.example.com/pub/",
            "/path/with/http://inside",
            "?q=1",
        ];

        for input in inputs {
            let once = normalize_path(input);
            assert_eq!(normalize_path(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_normalize_does_not_strip_embedded_scheme() {
        assert_eq!(
            normalize_path("/redirect/https://example.com"),
            "/redirect/https://example.com"
        );
    }
}

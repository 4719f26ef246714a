//! Legacy redirect mapping record.

use chrono::NaiveDate;

/// A row associating a historical path with the current document URL.
///
/// Records are loaded once at startup and never modified. Duplicate
/// `old_url` values are allowed; lookups honour load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectMapping {
    pub old_url: String,
    pub new_url: String,
    pub title: String,
    pub migrated_at: Option<NaiveDate>,
}

impl RedirectMapping {
    /// Creates a new mapping record.
    pub fn new(
        old_url: impl Into<String>,
        new_url: impl Into<String>,
        title: impl Into<String>,
        migrated_at: Option<NaiveDate>,
    ) -> Self {
        Self {
            old_url: old_url.into(),
            new_url: new_url.into(),
            title: title.into(),
            migrated_at,
        }
    }
}

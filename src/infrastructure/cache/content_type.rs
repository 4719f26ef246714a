//! Content type tags and their cache TTL policy.

use std::fmt;

/// Selects the cache TTL for a cached upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Document,
    CollectionStructure,
    Search,
    Attachment,
}

impl ContentType {
    /// All known content types.
    pub const ALL: [ContentType; 4] = [
        Self::Document,
        Self::CollectionStructure,
        Self::Search,
        Self::Attachment,
    ];

    /// Tag used inside cache keys and metric labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::CollectionStructure => "collection_structure",
            Self::Search => "search",
            Self::Attachment => "attachment",
        }
    }

    /// Time-to-live for entries of this type, in seconds.
    pub const fn ttl_seconds(self) -> u64 {
        match self {
            Self::Document => 60 * 60,
            Self::CollectionStructure => 60 * 60,
            Self::Search => 60 * 5,
            Self::Attachment => 60 * 60,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

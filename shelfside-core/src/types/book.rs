//! The Book record - the sole entity of the catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lending state of a book. Only meaningful for entries in the personal
/// collection; absent in stored JSON means Available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

/// A single catalog entry, as persisted in a collection file and as
/// returned by searches and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique within one persisted collection. Books normalized from a
    /// remote batch carry a provisional ordinal id until inserted.
    pub id: u64,

    /// Display title, never empty.
    pub name: String,

    /// Display author string; multiple contributors joined with ", ",
    /// "Unknown" when the source provides none.
    pub author: String,

    #[serde(default)]
    pub status: BookStatus,

    /// Cover thumbnail URI, if the source had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// When the book entered its persisted collection; absent on remote
    /// hits that were never added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Create an available book with no cover and no timestamp.
    pub fn new(id: u64, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            author: author.into(),
            status: BookStatus::Available,
            cover_image: None,
            added_at: None,
        }
    }

    /// Identity for deduplication: the (name, author) pair, case-folded.
    /// Never the id - ids are only unique within one collection.
    pub fn key(&self) -> (String, String) {
        Self::key_of(&self.name, &self.author)
    }

    /// Dedup key for a raw name/author pair.
    pub fn key_of(name: &str, author: &str) -> (String, String) {
        (name.to_lowercase(), author.to_lowercase())
    }

    /// Case-insensitive substring match over name and author, as used by
    /// the shared-collection search filter and the library view filter.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.author.to_lowercase().contains(&query)
    }
}

//! Book records

use serde::{Deserialize, Serialize};

/// One title in the catalog.
///
/// `issued_count` is a cumulative lifetime counter: it goes up on every
/// issue and is never decremented by a return. Only `available_copies`
/// round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique catalog id
    pub id: String,

    /// Title
    pub title: String,

    /// Author
    pub author: String,

    /// Copies the library owns
    pub total_copies: u32,

    /// Copies currently on the shelf
    #[serde(default)]
    pub available_copies: u32,

    /// Issues over the book's lifetime
    #[serde(default)]
    pub issued_count: u32,
}

impl Book {
    /// Create a catalog entry with every copy available.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            total_copies: copies,
            available_copies: copies,
            issued_count: 0,
        }
    }

    /// Substring match against id, title, or author.
    ///
    /// `needle` must already be lowercased; see `Library::search_books`.
    pub fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
    }
}

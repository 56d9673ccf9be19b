//! Member records

use serde::{Deserialize, Serialize};

/// One member of the roster.
///
/// `issued_books` holds the ids of books currently out with this member,
/// at most once each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique roster id
    pub id: String,

    /// Display name
    pub name: String,

    /// Ids of books currently out with this member
    #[serde(default)]
    pub issued_books: Vec<String>,
}

impl Member {
    /// Register a member holding nothing.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            issued_books: Vec::new(),
        }
    }

    /// Whether this member currently holds the given book.
    pub fn holds(&self, book_id: &str) -> bool {
        self.issued_books.iter().any(|held| held == book_id)
    }

    /// Record an issue. Callers check [`holds`](Self::holds) first; the
    /// list never carries duplicates.
    pub(crate) fn record_issue(&mut self, book_id: &str) {
        self.issued_books.push(book_id.to_string());
    }

    /// Record a return, dropping the id from the held list.
    pub(crate) fn record_return(&mut self, book_id: &str) {
        self.issued_books.retain(|held| held != book_id);
    }
}

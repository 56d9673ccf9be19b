//! Circulation log entries

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::{Book, Member};

/// What a log entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A copy left the shelf
    Issued,

    /// A copy came back
    Returned,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issued => write!(f, "Issued"),
            Self::Returned => write!(f, "Returned"),
        }
    }
}

/// One immutable entry in the circulation log.
///
/// Entries carry denormalized book and member names so the log renders
/// without lookups. Insertion order is the record order; display is
/// newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub book_id: String,
    pub book_title: String,
    pub member_id: String,
    pub member_name: String,

    /// Human-readable local timestamp, stored as text
    pub date: String,
}

impl Transaction {
    /// Record an event against a (book, member) pair, stamped with the
    /// current local time.
    pub fn record(kind: TransactionKind, book: &Book, member: &Member) -> Self {
        Self {
            kind,
            book_id: book.id.clone(),
            book_title: book.title.clone(),
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

//! Domain State
//!
//! The three in-memory collections and their load/save lifecycle.
//!
//! ## Responsibilities
//! - Load each collection from its store key at startup
//! - Fall back to empty on absent or unreadable values (fail-soft)
//! - Write every collection back after each mutation
//!
//! There is no transactionality across the three keys; a crash between
//! `set` calls can leave them inconsistent, and the next load takes
//! whatever it finds.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::domain::{Book, Member, Transaction};
use crate::error::{LibrisError, Result};
use crate::store::StateStore;

/// The collections owned by the circulation core.
#[derive(Debug, Default)]
pub struct LibraryState {
    /// Catalog, in insertion order
    pub books: Vec<Book>,

    /// Roster, in insertion order
    pub members: Vec<Member>,

    /// Circulation log, in insertion order (append-only)
    pub transactions: Vec<Transaction>,
}

impl LibraryState {
    /// Load all collections from the store.
    ///
    /// A missing value, or one that fails to parse, initializes its
    /// collection to empty; bad data is discarded with a warning rather
    /// than surfaced. Store read failures propagate.
    pub fn load<S: StateStore>(store: &S, config: &Config) -> Result<Self> {
        Ok(Self {
            books: load_collection(store, &config.books_key)?,
            members: load_collection(store, &config.members_key)?,
            transactions: load_collection(store, &config.transactions_key)?,
        })
    }

    /// Serialize all three collections back to the store, unconditionally.
    pub fn save<S: StateStore>(&self, store: &mut S, config: &Config) -> Result<()> {
        store.set(&config.books_key, &encode(&self.books)?)?;
        store.set(&config.members_key, &encode(&self.members)?)?;
        store.set(&config.transactions_key, &encode(&self.transactions)?)?;
        Ok(())
    }

    // =========================================================================
    // Lookup Helpers
    // =========================================================================

    /// Find a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Find a member by id
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Position of a book in the catalog
    pub(crate) fn book_position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Position of a member in the roster
    pub(crate) fn member_position(&self, id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }
}

/// Decode one stored collection, empty on absence or parse failure.
fn load_collection<S, T>(store: &S, key: &str) -> Result<Vec<T>>
where
    S: StateStore,
    T: DeserializeOwned,
{
    let raw = match store.get(key)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable collection");
            Ok(Vec::new())
        }
    }
}

fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(|e| LibrisError::Serialization(e.to_string()))
}

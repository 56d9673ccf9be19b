//! Library Module
//!
//! The circulation core that coordinates state, validation, and storage.
//!
//! ## Responsibilities
//! - Guard every mutation with its preconditions, in order
//! - Keep the in-memory collections authoritative
//! - Mirror state to the persistent store after every mutation
//! - Serve filtered views and aggregate counts for display

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{Book, Member, Transaction, TransactionKind};
use crate::error::{LibrisError, Result};
use crate::state::LibraryState;
use crate::store::StateStore;
use crate::validate;

/// Aggregate counts derived from the collections, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Titles in the catalog
    pub total_books: usize,

    /// Members on the roster
    pub total_members: usize,

    /// Entries in the circulation log
    pub total_transactions: usize,

    /// Copies currently on the shelf, summed over the catalog
    pub available_copies: u64,
}

/// The circulation core.
///
/// Owns the domain state and the persistent store. Every mutation
/// validates its input, applies the change, and writes all collections
/// back to the store before returning. A failed precondition returns the
/// matching error and leaves both state and store untouched.
pub struct Library<S: StateStore> {
    /// Instance configuration (store keys, data dir)
    config: Config,

    /// Persistent store the collections mirror into
    store: S,

    /// The in-memory collections (authoritative between saves)
    state: LibraryState,
}

impl<S: StateStore> Library<S> {
    /// Open a library over the given store, loading any existing state.
    pub fn open(config: Config, store: S) -> Result<Self> {
        let state = LibraryState::load(&store, &config)?;

        info!(
            books = state.books.len(),
            members = state.members.len(),
            transactions = state.transactions.len(),
            "library opened"
        );

        Ok(Self {
            config,
            store,
            state,
        })
    }

    // =========================================================================
    // Mutation Operations
    // =========================================================================

    /// Add a book to the catalog.
    ///
    /// Checks, in order: all fields present, a positive copy count, and
    /// an unused id. Every copy starts on the shelf.
    pub fn add_book(&mut self, id: &str, title: &str, author: &str, copies: u32) -> Result<()> {
        let id = id.trim();
        let title = title.trim();
        let author = author.trim();

        validate::book_input(id, title, author, copies)?;
        if self.state.book(id).is_some() {
            return Err(LibrisError::Validation("duplicate id".to_string()));
        }

        self.state.books.push(Book::new(id, title, author, copies));
        self.save()?;

        debug!(book = id, copies, "book added");
        Ok(())
    }

    /// Register a member with an empty held list.
    pub fn add_member(&mut self, id: &str, name: &str) -> Result<()> {
        let id = id.trim();
        let name = name.trim();

        validate::member_input(id, name)?;
        if self.state.member(id).is_some() {
            return Err(LibrisError::Validation("duplicate id".to_string()));
        }

        self.state.members.push(Member::new(id, name));
        self.save()?;

        debug!(member = id, "member added");
        Ok(())
    }

    /// Issue a book to a member.
    ///
    /// Preconditions, in order, each failing without any state change:
    /// the book exists, a copy is available, the member exists, and the
    /// member does not already hold this title. On success the held
    /// list, the copy counts, and the log are updated together and
    /// persisted; the appended log entry is returned.
    pub fn issue_book(&mut self, book_id: &str, member_id: &str) -> Result<Transaction> {
        let book_pos = self
            .state
            .book_position(book_id)
            .ok_or_else(|| LibrisError::not_found("book", book_id))?;
        if self.state.books[book_pos].available_copies == 0 {
            return Err(LibrisError::Conflict("no copies available".to_string()));
        }

        let member_pos = self
            .state
            .member_position(member_id)
            .ok_or_else(|| LibrisError::not_found("member", member_id))?;
        if self.state.members[member_pos].holds(book_id) {
            return Err(LibrisError::Conflict(
                "member already holds this book".to_string(),
            ));
        }

        let tx = Transaction::record(
            TransactionKind::Issued,
            &self.state.books[book_pos],
            &self.state.members[member_pos],
        );

        self.state.members[member_pos].record_issue(book_id);
        {
            let book = &mut self.state.books[book_pos];
            book.available_copies -= 1;
            book.issued_count += 1;
        }
        self.state.transactions.push(tx.clone());
        self.save()?;

        info!(book = book_id, member = member_id, "book issued");
        Ok(tx)
    }

    /// Take a book back from a member.
    ///
    /// Preconditions: the book exists, the member exists, and the member
    /// actually holds this title. On success the copy goes back on the
    /// shelf (`issued_count` stays put), the log gains a `Returned`
    /// entry, and state is persisted.
    pub fn return_book(&mut self, book_id: &str, member_id: &str) -> Result<Transaction> {
        let book_pos = self
            .state
            .book_position(book_id)
            .ok_or_else(|| LibrisError::not_found("book", book_id))?;

        let member_pos = self
            .state
            .member_position(member_id)
            .ok_or_else(|| LibrisError::not_found("member", member_id))?;
        if !self.state.members[member_pos].holds(book_id) {
            return Err(LibrisError::Conflict(
                "member does not hold this book".to_string(),
            ));
        }

        let tx = Transaction::record(
            TransactionKind::Returned,
            &self.state.books[book_pos],
            &self.state.members[member_pos],
        );

        self.state.members[member_pos].record_return(book_id);
        self.state.books[book_pos].available_copies += 1;
        self.state.transactions.push(tx.clone());
        self.save()?;

        info!(book = book_id, member = member_id, "book returned");
        Ok(tx)
    }

    // =========================================================================
    // Query Operations
    // =========================================================================

    /// Filter the catalog by a case-insensitive substring of id, title,
    /// or author.
    ///
    /// An empty or whitespace query returns every book in insertion
    /// order. The result is a view; nothing is mutated or persisted.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.state.books.iter().collect();
        }

        self.state
            .books
            .iter()
            .filter(|book| book.matches(&needle))
            .collect()
    }

    /// Aggregate counts, recomputed from the collections on demand.
    pub fn stats(&self) -> Stats {
        Stats {
            total_books: self.state.books.len(),
            total_members: self.state.members.len(),
            total_transactions: self.state.transactions.len(),
            available_copies: self
                .state
                .books
                .iter()
                .map(|b| u64::from(b.available_copies))
                .sum(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The catalog, in insertion order
    pub fn books(&self) -> &[Book] {
        &self.state.books
    }

    /// The roster, in insertion order
    pub fn members(&self) -> &[Member] {
        &self.state.members
    }

    /// The circulation log, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// The circulation log for display, newest entry first
    pub fn transactions_newest_first(&self) -> Vec<&Transaction> {
        self.state.transactions.iter().rev().collect()
    }

    /// Find a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.state.book(id)
    }

    /// Find a member by id
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.state.member(id)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear down the library and hand back the store (for inspection in
    /// tests and for reopening over the same backing data).
    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn save(&mut self) -> Result<()> {
        self.state.save(&mut self.store, &self.config)
    }
}

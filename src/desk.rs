//! Front Desk
//!
//! The user-facing coordination layer: one method per user-triggered
//! event, each running an operation against the core and refreshing the
//! views it affects.
//!
//! ## Responsibilities
//! - Surface user errors through [`Interaction::notify`]; never let them
//!   escape or end the session
//! - Prompt for member ids mid-operation, aborting silently on cancel
//! - Decide which views to re-render after each operation
//!
//! Store and serialization failures do propagate: there is nothing the
//! desk can say to the user that fixes a broken store.

use tracing::debug;

use crate::domain::Book;
use crate::error::Result;
use crate::library::Library;
use crate::store::StateStore;
use crate::ui::{Interaction, Presenter};

/// Coordinates the circulation core with its presentation and
/// interaction collaborators.
pub struct Desk<S: StateStore> {
    library: Library<S>,
    presenter: Box<dyn Presenter>,
    interaction: Box<dyn Interaction>,
}

impl<S: StateStore> Desk<S> {
    /// Put a desk in front of an open library.
    pub fn new(
        library: Library<S>,
        presenter: Box<dyn Presenter>,
        interaction: Box<dyn Interaction>,
    ) -> Self {
        Self {
            library,
            presenter,
            interaction,
        }
    }

    /// The library behind the desk (read-only).
    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    // =========================================================================
    // User Events
    // =========================================================================

    /// Add a book; refreshes the catalog and the counters.
    pub fn add_book(&mut self, id: &str, title: &str, author: &str, copies: u32) -> Result<()> {
        match self.library.add_book(id, title, author, copies) {
            Ok(()) => {
                self.show_books();
                self.show_stats();
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Register a member; refreshes the roster and the counters.
    pub fn add_member(&mut self, id: &str, name: &str) -> Result<()> {
        match self.library.add_member(id, name) {
            Ok(()) => {
                self.show_members();
                self.show_stats();
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Issue a book, prompting for the member id.
    ///
    /// The book is checked up front so the prompt can name the title and
    /// nobody is prompted for a doomed operation. A cancelled or empty
    /// prompt aborts silently.
    pub fn issue(&mut self, book_id: &str) -> Result<()> {
        let (title, available) = match self.library.book(book_id) {
            Some(book) => (book.title.clone(), book.available_copies),
            None => {
                self.interaction.notify("Book not found");
                return Ok(());
            }
        };
        if available == 0 {
            self.interaction.notify("No copies available");
            return Ok(());
        }

        let prompt = format!("Enter member id to issue \"{}\"", title);
        let member_id = match self.prompt_member(&prompt) {
            Some(id) => id,
            None => return Ok(()),
        };

        match self.library.issue_book(book_id, &member_id) {
            Ok(tx) => {
                self.refresh_all();
                self.interaction
                    .notify(&format!("Book issued to {}", tx.member_name));
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Take a book back, prompting for the member id.
    pub fn return_book(&mut self, book_id: &str) -> Result<()> {
        let title = match self.library.book(book_id) {
            Some(book) => book.title.clone(),
            None => {
                self.interaction.notify("Book not found");
                return Ok(());
            }
        };

        let prompt = format!("Enter member id returning \"{}\"", title);
        let member_id = match self.prompt_member(&prompt) {
            Some(id) => id,
            None => return Ok(()),
        };

        match self.library.return_book(book_id, &member_id) {
            Ok(tx) => {
                self.refresh_all();
                self.interaction
                    .notify(&format!("Book returned by {}", tx.member_name));
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Render the catalog filtered by a query. A view only; nothing is
    /// mutated or persisted.
    pub fn search(&mut self, query: &str) {
        let results = self.library.search_books(query);
        self.presenter.render_books(&results);
    }

    // =========================================================================
    // View Refreshes
    // =========================================================================

    /// Render every view, as on first load.
    pub fn refresh_all(&mut self) {
        self.show_books();
        self.show_members();
        self.show_transactions();
        self.show_stats();
    }

    /// Render the full catalog
    pub fn show_books(&mut self) {
        let books: Vec<&Book> = self.library.books().iter().collect();
        self.presenter.render_books(&books);
    }

    /// Render the roster
    pub fn show_members(&mut self) {
        let members: Vec<_> = self.library.members().iter().collect();
        self.presenter.render_members(&members);
    }

    /// Render the circulation log, newest first
    pub fn show_transactions(&mut self) {
        let transactions = self.library.transactions_newest_first();
        self.presenter.render_transactions(&transactions);
    }

    /// Render the aggregate counters
    pub fn show_stats(&mut self) {
        let stats = self.library.stats();
        self.presenter.render_stats(&stats);
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Run the prompt; a cancelled or empty answer becomes `None` and the
    /// caller aborts without a word, the way a dismissed dialog does.
    fn prompt_member(&mut self, context: &str) -> Option<String> {
        match self.interaction.prompt_member_id(context) {
            Some(answer) => {
                let id = answer.trim().to_string();
                if id.is_empty() {
                    debug!("member prompt left empty, aborting");
                    None
                } else {
                    Some(id)
                }
            }
            None => {
                debug!("member prompt cancelled, aborting");
                None
            }
        }
    }

    /// Tell the user about their error; hand anything else to the caller.
    fn report(&mut self, error: crate::LibrisError) -> Result<()> {
        if error.is_user_error() {
            self.interaction.notify(&error.to_string());
            Ok(())
        } else {
            Err(error)
        }
    }
}

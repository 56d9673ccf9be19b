//! UI Module
//!
//! Trait seams between the circulation core and whatever surface shows
//! it. The core never draws: it hands snapshots to a [`Presenter`] and
//! asks questions through an [`Interaction`]. Console implementations
//! back the CLI binary; tests plug in recording fakes.

mod console;

pub use console::{ConsoleInteraction, ConsolePresenter};

use crate::domain::{Book, Member, Transaction};
use crate::library::Stats;

/// Renders snapshots of the collections.
pub trait Presenter {
    /// Render the catalog, or a filtered view of it
    fn render_books(&mut self, books: &[&Book]);

    /// Render the member roster
    fn render_members(&mut self, members: &[&Member]);

    /// Render the circulation log; callers pass entries newest first
    fn render_transactions(&mut self, transactions: &[&Transaction]);

    /// Render the aggregate counters
    fn render_stats(&mut self, stats: &Stats);
}

/// Blocking prompt-and-alert collaborator.
pub trait Interaction {
    /// Ask the user for a member id. `None` means the prompt was
    /// cancelled; callers treat an empty answer the same way.
    fn prompt_member_id(&mut self, context: &str) -> Option<String>;

    /// Show the user a message and return once they have seen it.
    fn notify(&mut self, message: &str);
}

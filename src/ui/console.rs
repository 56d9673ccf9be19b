//! Console surface
//!
//! Plain-text tables on stdout, prompts and alerts on the terminal.

use std::io::{self, BufRead, Write};

use crate::domain::{Book, Member, Transaction};
use crate::library::Stats;

use super::{Interaction, Presenter};

/// Writes aligned text tables to stdout.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn render_books(&mut self, books: &[&Book]) {
        if books.is_empty() {
            println!("No books found");
            return;
        }

        println!(
            "{:<10} {:<32} {:<24} {:>6} {:>6}",
            "ID", "TITLE", "AUTHOR", "TOTAL", "AVAIL"
        );
        for book in books {
            println!(
                "{:<10} {:<32} {:<24} {:>6} {:>6}",
                book.id, book.title, book.author, book.total_copies, book.available_copies
            );
        }
    }

    fn render_members(&mut self, members: &[&Member]) {
        if members.is_empty() {
            println!("No members");
            return;
        }

        println!("{:<10} {:<28} {:>9}", "ID", "NAME", "BOOKS OUT");
        for member in members {
            println!(
                "{:<10} {:<28} {:>9}",
                member.id,
                member.name,
                member.issued_books.len()
            );
        }
    }

    fn render_transactions(&mut self, transactions: &[&Transaction]) {
        if transactions.is_empty() {
            println!("No transactions yet.");
            return;
        }

        for tx in transactions {
            println!(
                "[{}] {} — {} ({})",
                tx.kind, tx.book_title, tx.member_name, tx.date
            );
        }
    }

    fn render_stats(&mut self, stats: &Stats) {
        println!(
            "books: {}  members: {}  transactions: {}  available copies: {}",
            stats.total_books,
            stats.total_members,
            stats.total_transactions,
            stats.available_copies
        );
    }
}

/// Prompts on stdout, reads answers from stdin, prints alerts.
#[derive(Debug, Default)]
pub struct ConsoleInteraction;

impl ConsoleInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl Interaction for ConsoleInteraction {
    fn prompt_member_id(&mut self, context: &str) -> Option<String> {
        print!("{}: ", context);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // 0 bytes read = EOF, the console's way of cancelling
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

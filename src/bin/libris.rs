//! Libris CLI
//!
//! A front desk over a file-backed store. Each invocation loads state,
//! runs one desk flow, and persists before exiting.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use libris::ui::{ConsoleInteraction, ConsolePresenter, Interaction};
use libris::{Config, Desk, FileStore, Library};

/// Libris circulation desk
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Library circulation desk over a file-backed store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./libris_data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book to the catalog
    AddBook {
        /// Catalog id
        id: String,

        /// Title
        title: String,

        /// Author
        author: String,

        /// Number of copies
        copies: u32,
    },

    /// Register a member
    AddMember {
        /// Roster id
        id: String,

        /// Display name
        name: String,
    },

    /// Issue a book (prompts for the member id unless --member is given)
    Issue {
        /// Catalog id of the book
        book_id: String,

        /// Member id, skipping the prompt
        #[arg(short, long)]
        member: Option<String>,
    },

    /// Return a book (prompts for the member id unless --member is given)
    Return {
        /// Catalog id of the book
        book_id: String,

        /// Member id, skipping the prompt
        #[arg(short, long)]
        member: Option<String>,
    },

    /// Search the catalog by id, title, or author substring
    Search {
        /// Query text; empty shows everything
        query: String,
    },

    /// Print one collection
    List {
        /// Which collection to print
        what: ListTarget,
    },

    /// Print the aggregate counters
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ListTarget {
    Books,
    Members,
    Transactions,
}

/// Interaction that answers the member prompt from a flag instead of
/// asking; alerts still go to stdout.
struct PresetMember {
    id: String,
}

impl Interaction for PresetMember {
    fn prompt_member_id(&mut self, _context: &str) -> Option<String> {
        Some(self.id.clone())
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();

    let store = match FileStore::open(&config.data_dir) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    let library = match Library::open(config, store) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to open library: {}", e);
            std::process::exit(1);
        }
    };

    // A --member flag replaces the interactive prompt
    let preset = match &args.command {
        Commands::Issue { member, .. } | Commands::Return { member, .. } => member.clone(),
        _ => None,
    };
    let interaction: Box<dyn Interaction> = match preset {
        Some(id) => Box::new(PresetMember { id }),
        None => Box::new(ConsoleInteraction::new()),
    };

    let mut desk = Desk::new(library, Box::new(ConsolePresenter::new()), interaction);

    let result = match args.command {
        Commands::AddBook {
            id,
            title,
            author,
            copies,
        } => desk.add_book(&id, &title, &author, copies),
        Commands::AddMember { id, name } => desk.add_member(&id, &name),
        Commands::Issue { book_id, .. } => desk.issue(&book_id),
        Commands::Return { book_id, .. } => desk.return_book(&book_id),
        Commands::Search { query } => {
            desk.search(&query);
            Ok(())
        }
        Commands::List { what } => {
            match what {
                ListTarget::Books => desk.show_books(),
                ListTarget::Members => desk.show_members(),
                ListTarget::Transactions => desk.show_transactions(),
            }
            Ok(())
        }
        Commands::Stats => {
            desk.show_stats();
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("Operation failed: {}", e);
        std::process::exit(1);
    }
}

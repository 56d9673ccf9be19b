//! # Libris
//!
//! A small library circulation system:
//! - A catalog of books, a roster of members, and an append-only
//!   circulation log, held in memory by one owner
//! - Every mutation is validated, applied, and mirrored to a pluggable
//!   key/value store before it returns
//! - Rendering and prompting happen behind trait seams, so the core is
//!   testable without any surface attached
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Front Desk                            │
//! │               (one method per user event)                    │
//! └──────────┬──────────────────┬──────────────────┬────────────┘
//!            │                  │                  │
//!            ▼                  ▼                  ▼
//!     ┌────────────┐     ┌────────────┐     ┌─────────────┐
//!     │  Library   │     │ Presenter  │     │ Interaction │
//!     │   (core)   │     │  (render)  │     │  (prompt)   │
//!     └─────┬──────┘     └────────────┘     └─────────────┘
//!           │ validate → mutate → persist
//!           ▼
//!     ┌────────────┐
//!     │ StateStore │
//!     │ (kv store) │
//!     └────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod domain;
pub mod validate;
pub mod store;
pub mod state;
pub mod library;
pub mod ui;
pub mod desk;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LibrisError, Result};
pub use config::Config;
pub use desk::Desk;
pub use library::{Library, Stats};
pub use store::{FileStore, MemoryStore, StateStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Libris
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

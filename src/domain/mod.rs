//! Domain Module
//!
//! The entity records the circulation core owns.
//!
//! ## Responsibilities
//! - Tagged structs per entity with invariant-enforcing constructors
//! - Serde mappings that keep the stored records' camelCase field names
//!   and `"Issued"`/`"Returned"` tags, so legacy data loads unchanged
//!
//! Books and members are never deleted; the transaction log is
//! append-only and immutable once written.

mod book;
mod member;
mod transaction;

pub use book::Book;
pub use member::Member;
pub use transaction::{Transaction, TransactionKind};

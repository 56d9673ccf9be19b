//! Input validation
//!
//! Pure shape checks run before any mutation. Uniqueness checks live in
//! the operations themselves, since they need the state.

use crate::error::{LibrisError, Result};

/// Check add-book input: every text field present, a positive copy count.
pub fn book_input(id: &str, title: &str, author: &str, copies: u32) -> Result<()> {
    if id.trim().is_empty() || title.trim().is_empty() || author.trim().is_empty() {
        return Err(LibrisError::Validation("missing field".to_string()));
    }
    if copies == 0 {
        return Err(LibrisError::Validation("invalid copies".to_string()));
    }
    Ok(())
}

/// Check add-member input: id and name present.
pub fn member_input(id: &str, name: &str) -> Result<()> {
    if id.trim().is_empty() || name.trim().is_empty() {
        return Err(LibrisError::Validation("missing field".to_string()));
    }
    Ok(())
}

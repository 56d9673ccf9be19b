//! Error types for Libris
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Unified error type for Libris operations
#[derive(Debug, Error)]
pub enum LibrisError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Store error: {0}")]
    Store(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound {
        /// What kind of record was looked up ("book", "member")
        entity: &'static str,
        /// The id that missed
        id: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl LibrisError {
    /// Shorthand for a [`LibrisError::NotFound`] with an owned id.
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True for errors caused by user input rather than the environment.
    ///
    /// User errors are surfaced through the interaction collaborator and
    /// never end the session; store and I/O failures propagate instead.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound { .. } | Self::Conflict(_)
        )
    }
}

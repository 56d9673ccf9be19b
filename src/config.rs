//! Configuration for Libris
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Libris instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the file-backed store
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Store Keys
    // -------------------------------------------------------------------------
    /// Store key holding the serialized book catalog
    pub books_key: String,

    /// Store key holding the serialized member roster
    pub members_key: String,

    /// Store key holding the serialized circulation log
    pub transactions_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./libris_data"),
            books_key: "libris.books.v1".to_string(),
            members_key: "libris.members.v1".to_string(),
            transactions_key: "libris.transactions.v1".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory for the file-backed store
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the store key for the book catalog
    pub fn books_key(mut self, key: impl Into<String>) -> Self {
        self.config.books_key = key.into();
        self
    }

    /// Set the store key for the member roster
    pub fn members_key(mut self, key: impl Into<String>) -> Self {
        self.config.members_key = key.into();
        self
    }

    /// Set the store key for the circulation log
    pub fn transactions_key(mut self, key: impl Into<String>) -> Self {
        self.config.transactions_key = key.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

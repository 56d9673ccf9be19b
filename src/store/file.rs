//! File-backed store
//!
//! One file per key inside a data directory. Writes are buffered,
//! flushed, and synced before `set` returns.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LibrisError, Result};

use super::StateStore;

/// Store that keeps each key in its own file under a data directory.
pub struct FileStore {
    /// Directory holding one `<key>.json` file per key
    data_dir: PathBuf,
}

impl FileStore {
    const FILE_EXT: &'static str = "json";

    /// Open or create a store rooted at the given directory.
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;

        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Generate the file path for a key
    ///
    /// Characters outside `[A-Za-z0-9_-]` map to `_`, so
    /// "libris.books.v1" lands at "libris_books_v1.json".
    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.data_dir.join(format!("{}.{}", name, Self::FILE_EXT))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);
        writer.write_all(value.as_bytes())?;
        writer.flush()?;

        // Sync so a crash after `set` cannot lose the write
        let file = writer
            .into_inner()
            .map_err(|e| LibrisError::Store(format!("Failed to flush store file: {}", e)))?;
        file.sync_all()?;

        debug!(key, path = %path.display(), bytes = value.len(), "store write");

        Ok(())
    }
}

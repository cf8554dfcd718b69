//! JSON file storage for order collections
//!
//! One [`OrderStorage`] per document. Every load reads the whole file and
//! every save rewrites it; there is no locking, so two processes working on
//! the same directory can lose updates.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use shared::models::Order;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Malformed order document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// File-based order collection storage
#[derive(Debug, Clone)]
pub struct OrderStorage {
    path: PathBuf,
}

impl OrderStorage {
    /// The collection will be stored at `{base_path}/{filename}`.
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    /// Creates storage at a specific path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the full collection.
    ///
    /// A missing file is an empty collection. A file that exists but is not
    /// a JSON array of orders is an error.
    pub fn load(&self) -> StorageResult<Vec<Order>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Order file absent, using empty collection");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let orders: Vec<Order> =
            serde_json::from_str(&json).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = orders.len(), "Orders loaded");
        Ok(orders)
    }

    /// Overwrites the file with the full collection.
    ///
    /// Written as 4-space indented JSON with non-ASCII text kept verbatim.
    pub fn save(&self, orders: &[Order]) -> StorageResult<()> {
        self.ensure_dir().map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        orders.serialize(&mut ser).map_err(StorageError::Serialize)?;

        fs::write(&self.path, buf).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = orders.len(), "Orders saved");
        Ok(())
    }

    /// Ensures the parent directory exists.
    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Checks if the order file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Returns the storage path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! Durable key-value state storage.
//!
//! The cart persists its full state after every mutation under two fixed
//! string keys. The backend is a seam: tests and embedders use
//! [`MemoryStore`], the CLI uses [`FileStore`]. There is no schema
//! versioning and no cross-process synchronization; the last writer wins.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage key for the serialized cart lines.
pub const CART_KEY: &str = "cartItems";

/// Storage key for the serialized recent-items list.
pub const RECENT_KEY: &str = "recentItems";

/// Errors that can occur in a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be used by this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A durable string-keyed store for serialized state payloads.
pub trait StateStore {
    /// Read the payload stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid for this backend or the
    /// write fails.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

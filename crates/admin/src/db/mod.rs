//! Persistence for Author Desk.
//!
//! # Storage: a key-value slot
//!
//! The author collection is stored as one JSON document under a fixed key.
//! The slot itself is abstract ([`KeyValueSlot`]):
//!
//! - [`FileSlot`] - one file per key under the configured data directory
//! - [`MemorySlot`] - in-process map, used by tests and ephemeral runs
//!
//! ## Keys
//!
//! - `authors` - JSON array of author records

pub mod authors;
pub mod slot;

use thiserror::Error;

pub use authors::{AUTHORS_KEY, AuthorRepository, seed_authors};
pub use slot::{FileSlot, MemorySlot};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The slot could not be read or written.
    #[error("slot unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A durable string slot addressed by key.
pub trait KeyValueSlot: Send {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if the slot cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if the slot cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}

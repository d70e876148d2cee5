//! Durable-storage port and its implementations.
//!
//! # Responsibility
//! - Define the key-value slot contract the record store persists through.
//! - Keep filesystem details out of store/business code.
//!
//! # Invariants
//! - The slot holds one whole serialized collection; writes overwrite it
//!   unconditionally, reads return the full text or nothing.
//! - Both operations are synchronous from the caller's perspective.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport error for the durable slot.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Synchronous whole-value slot for the serialized collection.
///
/// Implementations must treat absence as `Ok(None)`, not an error; the
/// record store falls back to seed data in that case.
pub trait StoragePort {
    /// Reads the stored text, or `None` when the slot has never been written.
    fn load(&self) -> StorageResult<Option<String>>;

    /// Overwrites the slot with `text`.
    fn save(&mut self, text: &str) -> StorageResult<()>;
}

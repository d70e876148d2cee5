//! In-memory durable slot, used by tests and ephemeral runs.

use crate::storage::{StoragePort, StorageResult};

/// Slot held in memory; contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the slot already holding `text`, as if previously saved.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            slot: Some(text.into()),
        }
    }

    /// Direct view of the slot, for assertions.
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, text: &str) -> StorageResult<()> {
        self.slot = Some(text.to_string());
        Ok(())
    }
}

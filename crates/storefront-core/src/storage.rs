//! Cart Storage Abstraction
//!
//! The cart store persists through this trait only. The browser build wraps
//! `window.localStorage`; `MemoryStorage` backs tests and storage-less hosts.

use std::sync::Mutex;

use crate::error::StorageError;

/// A single-slot string store for the serialized cart
pub trait CartStorage {
    /// Read the persisted blob, `None` when absent or unreadable
    fn load(&self) -> Option<String>;

    /// Overwrite the persisted blob
    fn save(&self, raw: &str) -> Result<(), StorageError>;
}

/// In-memory storage slot
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `raw`
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
            read_only: false,
        }
    }

    /// Storage whose writes always fail (quota exceeded, private mode, ...)
    pub fn read_only() -> Self {
        Self {
            slot: Mutex::new(None),
            read_only: true,
        }
    }

    /// Current contents of the slot
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.contents()
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write("storage is read-only".to_string()));
        }
        let mut slot = self.slot.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load(), None);
        storage.save("{}").unwrap();
        assert_eq!(storage.load().as_deref(), Some("{}"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let storage = MemoryStorage::read_only();
        assert!(storage.save("{}").is_err());
        assert_eq!(storage.load(), None);
    }
}

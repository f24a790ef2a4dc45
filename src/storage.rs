//! Browser Storage Adapter
//!
//! `CartStorage` over `window.localStorage`. The handle is looked up per call,
//! so the adapter itself is a plain key and can live inside a signal.

use storefront_core::{CartStorage, StorageError};

#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CartStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(self.key).ok().flatten()
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(self.key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

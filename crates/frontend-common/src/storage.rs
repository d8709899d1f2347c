//! Browser `localStorage` behind the storage port

use clinic_core::{CoreError, CoreResult, StoragePort};
use web_sys::Storage;

/// `window.localStorage`, values stored as plain strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> CoreResult<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| CoreError::storage_unavailable("localStorage is not available"))
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| CoreError::storage(key, format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| CoreError::storage(key, format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| CoreError::storage(key, format!("{err:?}")))
    }
}

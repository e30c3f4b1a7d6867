use web_sys::{ Storage, Window };

use crate::error::{ PresentationError, Result };
use crate::host::PreferenceStore;

/// `window.localStorage`, if the browser grants it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|e| PresentationError::Storage(format!("getItem({}) failed: {:?}", key, e)))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        let Some(storage) = &self.storage else {
            return Err(PresentationError::Storage("localStorage unavailable".to_string()));
        };
        storage
            .set_item(key, value)
            .map_err(|e| PresentationError::Storage(format!("setItem({}) failed: {:?}", key, e)))
    }
}

use log::warn;

use gallery::{PreferenceStorage, StorageError};

use crate::utils::{get_local_storage, js_error};

/// Browser `localStorage` backend for the preference store.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let storage =
            get_local_storage().map_err(|err| StorageError::Unavailable(format!("{err:#}")))?;
        Ok(Self { storage })
    }
}

impl PreferenceStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                message: js_error(err).to_string(),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| {
            let message = js_error(err).to_string();
            warn!("Failed to save `{key}` to localStorage: {message}");
            StorageError::Write {
                key: key.to_string(),
                message,
            }
        })
    }
}

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::StorageError;

/// Synchronous key-value text storage, mirroring the browser `Storage` API.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Clones share the same items, so a store can be
/// "reloaded" from a clone to observe what was persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: Rc::new(RefCell::new(
                items
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            )),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

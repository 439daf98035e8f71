use std::rc::Rc;

use log::warn;

use gallery::{
    preferences::{ColorSchemeProbe, HeadlessColorScheme},
    InMemoryStorage, PreferenceStorage, PreferenceStore,
};

use crate::{services::local_storage::LocalStorage, theme::MediaQueryColorScheme};

/// Backends the preference store is built with.
pub struct PreferencesConfig {
    pub storage: Rc<dyn PreferenceStorage>,
    pub color_scheme: Rc<dyn ColorSchemeProbe>,
}

impl PreferencesConfig {
    pub fn from_browser() -> Self {
        let storage: Rc<dyn PreferenceStorage> = match LocalStorage::new() {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                warn!("{err}. Preferences will not be persisted.");
                Rc::new(InMemoryStorage::new())
            }
        };
        let color_scheme: Rc<dyn ColorSchemeProbe> = if web_sys::window().is_some() {
            Rc::new(MediaQueryColorScheme)
        } else {
            Rc::new(HeadlessColorScheme)
        };

        Self {
            storage,
            color_scheme,
        }
    }

    pub fn load_store(self) -> PreferenceStore {
        PreferenceStore::load(self.storage, self.color_scheme)
    }
}

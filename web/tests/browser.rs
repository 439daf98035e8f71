use std::rc::Rc;

use pretty_assertions::assert_eq;
use wasm_bindgen_test::*;

use gallery::{
    preferences::{ColorSchemeProbe, Theme, ThemeSetting, COLOR_THEME_KEY, LOCALE_KEY},
    PreferenceStorage, PreferenceStore,
};
use gallery_web::{
    services::local_storage::LocalStorage,
    theme::{apply_color_theme, MediaQueryColorScheme},
    utils::{get_document_element, get_local_storage},
};

wasm_bindgen_test_configure!(run_in_browser);

fn clear_local_storage() {
    get_local_storage().unwrap().clear().unwrap();
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    clear_local_storage();
    let storage = LocalStorage::new().unwrap();

    assert_eq!(storage.get_item(LOCALE_KEY).unwrap(), None);
    storage.set_item(LOCALE_KEY, "fr-FR").unwrap();

    assert_eq!(
        storage.get_item(LOCALE_KEY).unwrap(),
        Some("fr-FR".to_string())
    );
}

#[wasm_bindgen_test]
fn test_toggled_theme_keeps_the_bootstrap_script_shape() {
    clear_local_storage();
    get_local_storage()
        .unwrap()
        .set_item(COLOR_THEME_KEY, r#"{"value":"dark","system":false}"#)
        .unwrap();
    let store = PreferenceStore::load(
        Rc::new(LocalStorage::new().unwrap()),
        Rc::new(MediaQueryColorScheme),
    );

    store.toggle_theme().unwrap();

    assert_eq!(
        get_local_storage()
            .unwrap()
            .get_item(COLOR_THEME_KEY)
            .unwrap(),
        Some(r#"{"value":"light","system":false}"#.to_string())
    );
}

#[wasm_bindgen_test]
fn test_media_query_is_evaluated_in_browser() {
    assert!(MediaQueryColorScheme.prefers_dark().is_some());
}

#[wasm_bindgen_test]
fn test_apply_color_theme() {
    let element = get_document_element().unwrap();

    apply_color_theme(&ThemeSetting {
        value: Theme::Dark,
        system: false,
    })
    .unwrap();
    assert_eq!(element.get_attribute("data-theme"), Some("dark".to_string()));
    assert!(element.class_list().contains("dark"));

    apply_color_theme(&ThemeSetting {
        value: Theme::Light,
        system: false,
    })
    .unwrap();
    assert_eq!(element.get_attribute("data-theme"), Some("light".to_string()));
    assert!(!element.class_list().contains("dark"));
}

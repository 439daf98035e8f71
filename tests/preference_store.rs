use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use pretty_assertions::assert_eq;
use rstest::*;

use gallery::{
    preferences::{
        AlbumFilter, AlbumGroupBy, AlbumSortBy, AlbumViewMode, AlbumViewSettings, MapSettings,
        SidebarSettings, SortOrder, Theme, ThemeSetting, COLOR_THEME_KEY, LOCALE_KEY,
    },
    InMemoryStorage, PreferenceError, PreferenceStorage, PreferenceStore, StorageError,
};

#[fixture]
fn storage() -> InMemoryStorage {
    InMemoryStorage::new()
}

fn load(storage: &InMemoryStorage, prefers_dark: Option<bool>) -> PreferenceStore {
    PreferenceStore::load(Rc::new(storage.clone()), Rc::new(move || prefers_dark))
}

#[rstest]
fn test_every_preference_survives_a_reload(storage: InMemoryStorage) {
    let store = load(&storage, Some(true));
    let map_settings = MapSettings {
        allow_dark_mode: false,
        include_archived: true,
        only_favorites: true,
        with_partners: true,
        relative_date: "P1Y".to_string(),
        date_after: "2020-01-01".to_string(),
        date_before: "2021-12-31".to_string(),
    };
    let mut album_view_settings = AlbumViewSettings {
        view: AlbumViewMode::List,
        filter: AlbumFilter::Owned,
        group_by: AlbumGroupBy::Owner,
        group_order: SortOrder::Asc,
        sort_by: AlbumSortBy::Title,
        sort_order: SortOrder::Asc,
        ..AlbumViewSettings::default()
    };
    album_view_settings.toggle_group_collapsed(AlbumGroupBy::Owner, "user-1");
    let theme = ThemeSetting {
        value: Theme::Light,
        system: true,
    };

    store.color_theme.set(theme).unwrap();
    store.locale.set(Some("zh-CN".to_string())).unwrap();
    store.map_settings.set(map_settings.clone()).unwrap();
    store.video_viewer_volume.set(0.35).unwrap();
    store.is_show_detail.set(true).unwrap();
    store
        .sidebar_settings
        .set(SidebarSettings {
            people: true,
            sharing: false,
        })
        .unwrap();
    store
        .album_view_settings
        .set(album_view_settings.clone())
        .unwrap();
    store.show_delete_modal.set(false).unwrap();
    store.always_load_original_file.set(true).unwrap();
    store.play_video_thumbnail_on_hover.set(false).unwrap();

    let reloaded = load(&storage, Some(true));

    assert_eq!(reloaded.color_theme.get(), theme);
    assert_eq!(reloaded.locale.get(), Some("zh-CN".to_string()));
    assert_eq!(reloaded.map_settings.get(), map_settings);
    assert_eq!(reloaded.video_viewer_volume.get(), 0.35);
    assert!(reloaded.is_show_detail.get());
    assert_eq!(
        reloaded.sidebar_settings.get(),
        SidebarSettings {
            people: true,
            sharing: false
        }
    );
    assert_eq!(reloaded.album_view_settings.get(), album_view_settings);
    assert!(!reloaded.show_delete_modal.get());
    assert!(reloaded.always_load_original_file.get());
    assert!(!reloaded.play_video_thumbnail_on_hover.get());
}

#[rstest]
fn test_invalid_stored_theme_is_replaced_by_system_theme(storage: InMemoryStorage) {
    storage
        .set_item(COLOR_THEME_KEY, r#"{"value":"purple","system":false}"#)
        .unwrap();

    assert_eq!(
        load(&storage, Some(false)).color_theme.get(),
        ThemeSetting {
            value: Theme::Light,
            system: false
        }
    );
    assert_eq!(
        load(&storage, Some(true)).color_theme.get(),
        ThemeSetting {
            value: Theme::Dark,
            system: false
        }
    );
}

#[rstest]
fn test_malformed_stored_values_fall_back_to_defaults(storage: InMemoryStorage) {
    for (key, raw) in [
        (COLOR_THEME_KEY, "{not json"),
        ("map-settings", r#"{"allowDarkMode":"yes"}"#),
        ("video-viewer-volume", "loud"),
        ("album-view-settings", r#"{"view":"grid"}"#),
        ("sidebar-settings-1", "[]"),
        ("delete-confirm-dialog", "\"no\""),
    ] {
        storage.set_item(key, raw).unwrap();
    }

    let store = load(&storage, Some(false));

    assert_eq!(store.color_theme.get().value, Theme::Light);
    assert_eq!(store.map_settings.get(), MapSettings::default());
    assert_eq!(store.video_viewer_volume.get(), 1.0);
    assert_eq!(store.album_view_settings.get(), AlbumViewSettings::default());
    assert_eq!(store.sidebar_settings.get(), SidebarSettings::default());
    assert!(store.show_delete_modal.get());
}

#[rstest]
fn test_unset_locale_round_trips_through_empty_string(storage: InMemoryStorage) {
    let store = load(&storage, None);
    store.locale.set(Some("en-GB".to_string())).unwrap();

    store.locale.set(None).unwrap();

    assert_eq!(storage.get_item(LOCALE_KEY).unwrap(), Some(String::new()));
    assert_eq!(load(&storage, None).locale.get(), None);
}

#[rstest]
fn test_locale_is_stored_as_raw_text(storage: InMemoryStorage) {
    load(&storage, None)
        .locale
        .set(Some("pt-BR".to_string()))
        .unwrap();

    assert_eq!(
        storage.get_item(LOCALE_KEY).unwrap(),
        Some("pt-BR".to_string())
    );
}

#[rstest]
fn test_subscribe_receives_current_value_before_any_change(storage: InMemoryStorage) {
    storage.set_item("info-opened", "true").unwrap();
    let store = load(&storage, None);
    let received = Rc::new(RefCell::new(Vec::new()));

    let _subscription = store.is_show_detail.subscribe({
        let received = Rc::clone(&received);
        move |opened: &bool| received.borrow_mut().push(*opened)
    });

    assert_eq!(*received.borrow(), vec![true]);
}

#[rstest]
fn test_album_view_settings_defaults_are_descending(storage: InMemoryStorage) {
    let settings = load(&storage, None).album_view_settings.get();

    assert!(settings.collapsed_groups.is_empty());
    assert_eq!(settings.group_order, SortOrder::Desc);
    assert_eq!(settings.sort_order, SortOrder::Desc);
}

struct QuotaExceededStorage {
    writes: Cell<usize>,
}

impl PreferenceStorage for QuotaExceededStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        Err(StorageError::Write {
            key: key.to_string(),
            message: "QuotaExceededError".to_string(),
        })
    }
}

#[rstest]
fn test_storage_write_failure_is_returned_to_the_caller() {
    let storage = Rc::new(QuotaExceededStorage {
        writes: Cell::new(0),
    });
    let store = PreferenceStore::load(storage.clone(), Rc::new(|| Some(true)));

    let result = store.toggle_theme();

    match result {
        Err(PreferenceError::Storage { key, source }) => {
            assert_eq!(key, COLOR_THEME_KEY);
            assert_eq!(
                source,
                StorageError::Write {
                    key: COLOR_THEME_KEY.to_string(),
                    message: "QuotaExceededError".to_string()
                }
            );
        }
        other => panic!("Unexpected result: {other:?}"),
    }
    assert_eq!(storage.writes.get(), 1);
    assert_eq!(store.color_theme.get().value, Theme::Dark);
}

#[rstest]
fn test_subscribers_agree_with_the_store_after_a_nested_write(storage: InMemoryStorage) {
    let store = load(&storage, None);
    let volume = store.video_viewer_volume.clone();
    let first_seen = Rc::new(Cell::new(f64::NAN));
    let last_seen = Rc::new(Cell::new(f64::NAN));

    let _first = store.video_viewer_volume.subscribe({
        let first_seen = Rc::clone(&first_seen);
        move |value: &f64| first_seen.set(*value)
    });
    let _limit = store.video_viewer_volume.subscribe(move |value: &f64| {
        if *value > 0.8 {
            volume.set(0.8).unwrap();
        }
    });
    let _last = store.video_viewer_volume.subscribe({
        let last_seen = Rc::clone(&last_seen);
        move |value: &f64| last_seen.set(*value)
    });

    store.video_viewer_volume.set(0.95).unwrap();

    assert_eq!(store.video_viewer_volume.get(), 0.8);
    assert_eq!(first_seen.get(), 0.8);
    assert_eq!(last_seen.get(), 0.8);
    assert_eq!(load(&storage, None).video_viewer_volume.get(), 0.8);
}

#[rstest]
fn test_non_finite_volume_is_rejected(storage: InMemoryStorage) {
    let store = load(&storage, None);
    store.video_viewer_volume.set(0.4).unwrap();

    let result = store.video_viewer_volume.set(f64::NAN);

    assert!(matches!(
        result,
        Err(PreferenceError::Serialization {
            key: "video-viewer-volume",
            ..
        })
    ));
    assert_eq!(store.video_viewer_volume.get(), 0.4);
    assert_eq!(
        storage.get_item("video-viewer-volume").unwrap(),
        Some("0.4".to_string())
    );
}

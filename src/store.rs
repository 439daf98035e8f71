use std::rc::Rc;

use log::debug;

use crate::{
    codec::{FiniteNumberCodec, JsonCodec, TextCodec, ThemeCodec},
    error::PreferenceError,
    persisted::Persisted,
    preferences::{
        AlbumViewSettings, ColorSchemeProbe, MapSettings, SidebarSettings, ThemeSetting,
        ALBUM_VIEW_SETTINGS_KEY, ALWAYS_LOAD_ORIGINAL_FILE_KEY, COLOR_THEME_KEY,
        DEFAULT_VIDEO_VIEWER_VOLUME, LOCALE_KEY, MAP_SETTINGS_KEY,
        PLAY_VIDEO_THUMBNAIL_ON_HOVER_KEY, SHOW_DELETE_MODAL_KEY, SHOW_DETAIL_KEY,
        SIDEBAR_SETTINGS_KEY, VIDEO_VIEWER_VOLUME_KEY,
    },
    storage::PreferenceStorage,
};

/// Every user preference of the application, each persisted under its own key.
///
/// Built once at startup and shared by reference; clones share the same values.
#[derive(Clone, PartialEq)]
pub struct PreferenceStore {
    pub color_theme: Persisted<ThemeSetting>,
    /// Locale used to format dates and numbers
    pub locale: Persisted<Option<String>>,
    pub map_settings: Persisted<MapSettings>,
    pub video_viewer_volume: Persisted<f64>,
    pub is_show_detail: Persisted<bool>,
    pub sidebar_settings: Persisted<SidebarSettings>,
    pub album_view_settings: Persisted<AlbumViewSettings>,
    pub show_delete_modal: Persisted<bool>,
    pub always_load_original_file: Persisted<bool>,
    pub play_video_thumbnail_on_hover: Persisted<bool>,
}

impl PreferenceStore {
    pub fn load(
        storage: Rc<dyn PreferenceStorage>,
        color_scheme: Rc<dyn ColorSchemeProbe>,
    ) -> Self {
        let initial_theme = ThemeSetting::detect(color_scheme.as_ref());
        debug!("Initial theme detected: {}", initial_theme.value);

        Self {
            color_theme: Persisted::load(
                COLOR_THEME_KEY,
                initial_theme,
                ThemeCodec::new(color_scheme),
                Rc::clone(&storage),
            ),
            locale: Persisted::load(LOCALE_KEY, None, TextCodec, Rc::clone(&storage)),
            map_settings: Persisted::load(
                MAP_SETTINGS_KEY,
                MapSettings::default(),
                JsonCodec,
                Rc::clone(&storage),
            ),
            video_viewer_volume: Persisted::load(
                VIDEO_VIEWER_VOLUME_KEY,
                DEFAULT_VIDEO_VIEWER_VOLUME,
                FiniteNumberCodec,
                Rc::clone(&storage),
            ),
            is_show_detail: Persisted::load(SHOW_DETAIL_KEY, false, JsonCodec, Rc::clone(&storage)),
            sidebar_settings: Persisted::load(
                SIDEBAR_SETTINGS_KEY,
                SidebarSettings::default(),
                JsonCodec,
                Rc::clone(&storage),
            ),
            album_view_settings: Persisted::load(
                ALBUM_VIEW_SETTINGS_KEY,
                AlbumViewSettings::default(),
                JsonCodec,
                Rc::clone(&storage),
            ),
            show_delete_modal: Persisted::load(
                SHOW_DELETE_MODAL_KEY,
                true,
                JsonCodec,
                Rc::clone(&storage),
            ),
            always_load_original_file: Persisted::load(
                ALWAYS_LOAD_ORIGINAL_FILE_KEY,
                false,
                JsonCodec,
                Rc::clone(&storage),
            ),
            play_video_thumbnail_on_hover: Persisted::load(
                PLAY_VIDEO_THUMBNAIL_ON_HOVER_KEY,
                true,
                JsonCodec,
                storage,
            ),
        }
    }

    /// Switches between the light and dark themes, keeping the `system` flag.
    pub fn toggle_theme(&self) -> Result<ThemeSetting, PreferenceError> {
        let theme = self
            .color_theme
            .update(|theme| *theme = theme.toggled())?;
        debug!("Theme switched to {}", theme.value);
        Ok(theme)
    }
}

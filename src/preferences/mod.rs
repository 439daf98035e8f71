use serde::{Deserialize, Serialize};

pub mod album;
pub mod theme;

pub use album::{AlbumFilter, AlbumGroupBy, AlbumSortBy, AlbumViewMode, AlbumViewSettings, SortOrder};
pub use theme::{ColorSchemeProbe, HeadlessColorScheme, Theme, ThemeSetting};

// Storage keys. `color-theme` is shared with the page bootstrap script.
pub const COLOR_THEME_KEY: &str = "color-theme";
pub const LOCALE_KEY: &str = "locale";
pub const MAP_SETTINGS_KEY: &str = "map-settings";
pub const VIDEO_VIEWER_VOLUME_KEY: &str = "video-viewer-volume";
pub const SHOW_DETAIL_KEY: &str = "info-opened";
pub const SIDEBAR_SETTINGS_KEY: &str = "sidebar-settings-1";
pub const ALBUM_VIEW_SETTINGS_KEY: &str = "album-view-settings";
pub const SHOW_DELETE_MODAL_KEY: &str = "delete-confirm-dialog";
pub const ALWAYS_LOAD_ORIGINAL_FILE_KEY: &str = "always-load-original-file";
pub const PLAY_VIDEO_THUMBNAIL_ON_HOVER_KEY: &str = "play-video-thumbnail-on-hover";

pub const DEFAULT_VIDEO_VIEWER_VOLUME: f64 = 1.0;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub allow_dark_mode: bool,
    pub include_archived: bool,
    pub only_favorites: bool,
    pub with_partners: bool,
    pub relative_date: String,
    pub date_after: String,
    pub date_before: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            allow_dark_mode: true,
            include_archived: false,
            only_favorites: false,
            with_partners: false,
            relative_date: String::new(),
            date_after: String::new(),
            date_before: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq)]
pub struct SidebarSettings {
    pub people: bool,
    pub sharing: bool,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            people: false,
            sharing: true,
        }
    }
}

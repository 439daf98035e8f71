#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::debug;

use gallery::{
    preferences::{AlbumFilter, AlbumGroupBy, AlbumSortBy, AlbumViewMode, MapSettings, SortOrder},
    PreferenceStore,
};

use crate::{
    components::{
        preference_inputs::{select_options, BooleanPreference, OptionSelect, TextInput, ToggleRow},
        theme_toggle::ThemeToggle,
    },
    hooks::{log_save_error, use_persisted},
};

pub fn PreferencesPage() -> Element {
    let store = use_context::<PreferenceStore>();

    debug!("Rendering preferences page");

    rsx! {
        div {
            class: "h-full mx-auto flex flex-col gap-4 px-4 overflow-auto scroll-auto max-w-2xl",

            Section {
                title: "Appearance",
                div {
                    class: "flex items-center justify-between gap-2 py-1",
                    span { "Theme" }
                    ThemeToggle {}
                }
                LocaleInput {}
            }

            Section {
                title: "Sidebar",
                SidebarPreferences {}
            }

            Section {
                title: "Viewer",
                VolumeSlider {}
                BooleanPreference { label: "Show detail panel", preference: store.is_show_detail.clone() }
                BooleanPreference { label: "Always load original file", preference: store.always_load_original_file.clone() }
                BooleanPreference { label: "Play video thumbnail on hover", preference: store.play_video_thumbnail_on_hover.clone() }
                BooleanPreference { label: "Confirm before deleting", preference: store.show_delete_modal.clone() }
            }

            Section {
                title: "Albums",
                AlbumViewPreferences {}
            }

            Section {
                title: "Map",
                MapPreferences {}
            }
        }
    }
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "card w-full bg-base-200 text-base-content",
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                { children }
            }
        }
    }
}

#[component]
fn LocaleInput() -> Element {
    let preference = use_context::<PreferenceStore>().locale;
    let locale = use_persisted(preference.clone());

    rsx! {
        TextInput {
            label: "Locale",
            input_type: "text",
            value: locale().unwrap_or_default(),
            onchange: move |value: String| {
                let value = value.trim();
                let locale = (!value.is_empty()).then(|| value.to_string());
                log_save_error(preference.set(locale));
            }
        }
    }
}

#[component]
fn VolumeSlider() -> Element {
    let preference = use_context::<PreferenceStore>().video_viewer_volume;
    let volume = use_persisted(preference.clone());

    rsx! {
        label {
            class: "flex items-center justify-between gap-2 py-1",
            span { "Video volume" }
            input {
                class: "range range-sm w-48",
                "type": "range",
                min: "0",
                max: "1",
                step: "0.05",
                value: "{volume}",
                oninput: move |evt: FormEvent| {
                    if let Ok(volume) = evt.value().parse::<f64>() {
                        log_save_error(preference.set(volume.clamp(0.0, 1.0)));
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarPreferences() -> Element {
    let preference = use_context::<PreferenceStore>().sidebar_settings;
    let settings = use_persisted(preference.clone());
    let people_preference = preference.clone();

    rsx! {
        ToggleRow {
            label: "People",
            checked: settings().people,
            onchange: move |checked: bool| {
                log_save_error(people_preference.update(|settings| settings.people = checked));
            }
        }
        ToggleRow {
            label: "Sharing",
            checked: settings().sharing,
            onchange: move |checked: bool| {
                log_save_error(preference.update(|settings| settings.sharing = checked));
            }
        }
    }
}

#[component]
fn AlbumViewPreferences() -> Element {
    let preference = use_context::<PreferenceStore>().album_view_settings;
    let settings = use_persisted(preference.clone());
    let current = settings();

    rsx! {
        OptionSelect {
            label: "View",
            options: select_options(AlbumViewMode::label),
            selected: current.view.to_string(),
            onchange: {
                let preference = preference.clone();
                move |key: String| {
                    if let Ok(view) = key.parse::<AlbumViewMode>() {
                        log_save_error(preference.update(|settings| settings.view = view));
                    }
                }
            }
        }
        OptionSelect {
            label: "Filter",
            options: select_options(AlbumFilter::label),
            selected: current.filter.to_string(),
            onchange: {
                let preference = preference.clone();
                move |key: String| {
                    if let Ok(filter) = key.parse::<AlbumFilter>() {
                        log_save_error(preference.update(|settings| settings.filter = filter));
                    }
                }
            }
        }
        OptionSelect {
            label: "Group by",
            options: select_options(AlbumGroupBy::label),
            selected: current.group_by.to_string(),
            onchange: {
                let preference = preference.clone();
                move |key: String| {
                    if let Ok(group_by) = key.parse::<AlbumGroupBy>() {
                        log_save_error(preference.update(|settings| settings.group_by = group_by));
                    }
                }
            }
        }
        OptionSelect {
            label: "Group order",
            options: select_options(SortOrder::label),
            selected: current.group_order.to_string(),
            onchange: {
                let preference = preference.clone();
                move |key: String| {
                    if let Ok(order) = key.parse::<SortOrder>() {
                        log_save_error(preference.update(|settings| settings.group_order = order));
                    }
                }
            }
        }
        OptionSelect {
            label: "Sort by",
            options: select_options(AlbumSortBy::label),
            selected: current.sort_by.to_string(),
            onchange: {
                let preference = preference.clone();
                move |key: String| {
                    if let Ok(sort_by) = key.parse::<AlbumSortBy>() {
                        log_save_error(preference.update(|settings| settings.sort_by = sort_by));
                    }
                }
            }
        }
        OptionSelect {
            label: "Sort order",
            options: select_options(SortOrder::label),
            selected: current.sort_order.to_string(),
            onchange: move |key: String| {
                if let Ok(order) = key.parse::<SortOrder>() {
                    log_save_error(preference.update(|settings| settings.sort_order = order));
                }
            }
        }
    }
}

#[component]
fn MapPreferences() -> Element {
    let preference = use_context::<PreferenceStore>().map_settings;
    let settings = use_persisted(preference.clone());
    let current = settings();
    let toggles: [(&'static str, bool, fn(&mut MapSettings, bool)); 4] = [
        ("Allow dark mode", current.allow_dark_mode, |settings, checked| {
            settings.allow_dark_mode = checked
        }),
        ("Include archived", current.include_archived, |settings, checked| {
            settings.include_archived = checked
        }),
        ("Only favorites", current.only_favorites, |settings, checked| {
            settings.only_favorites = checked
        }),
        ("Include partners", current.with_partners, |settings, checked| {
            settings.with_partners = checked
        }),
    ];
    let dates: [(&'static str, &'static str, String, fn(&mut MapSettings, String)); 3] = [
        ("Relative date", "text", current.relative_date.clone(), |settings, value| {
            settings.relative_date = value
        }),
        ("Date after", "date", current.date_after.clone(), |settings, value| {
            settings.date_after = value
        }),
        ("Date before", "date", current.date_before.clone(), |settings, value| {
            settings.date_before = value
        }),
    ];

    rsx! {
        for (label, checked, apply) in toggles {
            ToggleRow {
                key: "{label}",
                label: label,
                checked: checked,
                onchange: {
                    let preference = preference.clone();
                    move |checked: bool| {
                        log_save_error(preference.update(|settings| apply(settings, checked)));
                    }
                }
            }
        }
        for (label, input_type, value, apply) in dates {
            TextInput {
                key: "{label}",
                label: label,
                input_type: input_type,
                value: value,
                onchange: {
                    let preference = preference.clone();
                    move |value: String| {
                        log_save_error(preference.update(|settings| apply(settings, value)));
                    }
                }
            }
        }
    }
}

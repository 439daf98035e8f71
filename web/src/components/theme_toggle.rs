#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsMoon, BsSun},
    Icon,
};
use log::error;

use gallery::PreferenceStore;

use crate::hooks::use_persisted;

#[component]
pub fn ThemeToggle() -> Element {
    let store = use_context::<PreferenceStore>();
    let theme = use_persisted(store.color_theme.clone());

    rsx! {
        label {
            class: "btn btn-ghost btn-square swap swap-rotate",
            title: "Toggle theme",
            input {
                class: "hidden",
                "type": "checkbox",
                checked: theme().is_dark(),
                onclick: move |_| {
                    if let Err(err) = store.toggle_theme() {
                        error!("Failed to switch the theme: {err:?}");
                    }
                }
            }
            Icon { class: "swap-on w-5 h-5", icon: BsSun }
            Icon { class: "swap-off w-5 h-5", icon: BsMoon }
        }
    }
}

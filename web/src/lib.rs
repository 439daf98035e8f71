#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use log::{debug, error};

use components::nav_bar::NavBar;
use config::PreferencesConfig;
use pages::preferences_page::PreferencesPage;
use theme::apply_color_theme;

pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod services;
pub mod theme;
pub mod utils;

pub fn App() -> Element {
    let store = use_context_provider(|| PreferencesConfig::from_browser().load_store());
    use_hook(|| {
        Rc::new(store.color_theme.subscribe(|theme| {
            if let Err(err) = apply_color_theme(theme) {
                error!("Failed to apply the theme: {err:?}");
            }
        }))
    });

    debug!("Rendering app");
    rsx! {
        div {
            class: "h-full flex flex-col text-sm",

            NavBar {}
            PreferencesPage {}
        }
    }
}


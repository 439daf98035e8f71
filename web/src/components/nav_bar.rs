#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        div {
            class: "navbar shadow-sm z-10 max-sm:px-0",

            div {
                class: "navbar-start",
                span { class: "text-lg font-semibold", "Gallery" }
            }

            div {
                class: "navbar-end",
                ThemeToggle {}
            }
        }
    }
}

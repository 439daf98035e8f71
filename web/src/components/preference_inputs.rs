#![allow(non_snake_case)]

use std::fmt::Display;

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use gallery::Persisted;

use crate::hooks::{log_save_error, use_persisted};

/// `(stable key, display label)` pairs for every variant of `E`.
pub fn select_options<E>(label: impl Fn(&E) -> &'static str) -> Vec<(String, &'static str)>
where
    E: IntoEnumIterator + Display,
{
    E::iter()
        .map(|variant| (variant.to_string(), label(&variant)))
        .collect()
}

#[component]
pub fn ToggleRow(label: &'static str, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "flex items-center justify-between gap-2 py-1",
            span { "{label}" }
            input {
                class: "switch switch-primary",
                "type": "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
        }
    }
}

#[component]
pub fn BooleanPreference(label: &'static str, preference: Persisted<bool>) -> Element {
    let value = use_persisted(preference.clone());

    rsx! {
        ToggleRow {
            label: label,
            checked: value(),
            onchange: move |checked: bool| log_save_error(preference.set(checked)),
        }
    }
}

#[component]
pub fn OptionSelect(
    label: &'static str,
    options: Vec<(String, &'static str)>,
    selected: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "flex items-center justify-between gap-2 py-1",
            span { "{label}" }
            select {
                class: "select select-sm w-48",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                for (key, option_label) in options {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == selected,
                        {option_label}
                    }
                }
            }
        }
    }
}

#[component]
pub fn TextInput(
    label: &'static str,
    input_type: &'static str,
    value: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "flex items-center justify-between gap-2 py-1",
            span { "{label}" }
            input {
                class: "input input-sm w-48",
                "type": "{input_type}",
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
            }
        }
    }
}

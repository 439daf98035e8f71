use anyhow::Result;
use log::debug;

use gallery::preferences::{ColorSchemeProbe, ThemeSetting};

use crate::utils::{get_document_element, js_error};

pub const DARK_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Evaluates the `prefers-color-scheme` media feature of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaQueryColorScheme;

impl ColorSchemeProbe for MediaQueryColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        let window = web_sys::window()?;
        match window.match_media(DARK_COLOR_SCHEME_QUERY) {
            Ok(Some(query)) => Some(query.matches()),
            _ => None,
        }
    }
}

/// Reflects the theme on the `<html>` element, as the bootstrap script in
/// `index.html` does before the application starts.
pub fn apply_color_theme(theme: &ThemeSetting) -> Result<()> {
    let document_element = get_document_element()?;
    debug!("Applying {} theme", theme.value);

    document_element
        .set_attribute("data-theme", &theme.value.to_string())
        .map_err(js_error)?;
    if theme.is_dark() {
        document_element
            .class_list()
            .add_1("dark")
            .map_err(js_error)?;
    } else {
        document_element
            .class_list()
            .remove_1("dark")
            .map_err(js_error)?;
    }

    Ok(())
}

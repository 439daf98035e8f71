use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Source of the operating system colour scheme.
///
/// Returns `None` when no browser context is available (prerendering,
/// native tests), in which case the dark theme is assumed.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> Option<bool>;
}

impl<F> ColorSchemeProbe for F
where
    F: Fn() -> Option<bool>,
{
    fn prefers_dark(&self) -> Option<bool> {
        self()
    }
}

/// Probe used outside of a browser: the media query cannot be evaluated.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessColorScheme;

impl ColorSchemeProbe for HeadlessColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// Persisted under the `color-theme` key. The JSON shape is also read by the
/// bootstrap script in `web/index.html` before the application starts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq)]
pub struct ThemeSetting {
    pub value: Theme,
    pub system: bool,
}

impl ThemeSetting {
    /// Computes the default theme from the OS colour scheme.
    ///
    /// `system` is always `false` here, only an explicit caller may set it.
    pub fn detect(probe: &dyn ColorSchemeProbe) -> Self {
        let value = match probe.prefers_dark() {
            Some(false) => Theme::Light,
            Some(true) | None => Theme::Dark,
        };
        ThemeSetting {
            value,
            system: false,
        }
    }

    pub fn toggled(self) -> Self {
        ThemeSetting {
            value: self.value.toggled(),
            ..self
        }
    }

    pub fn is_dark(&self) -> bool {
        self.value == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case::light_system(Some(false), Theme::Light)]
    #[case::dark_system(Some(true), Theme::Dark)]
    #[case::no_browser(None, Theme::Dark)]
    fn test_detect_theme(#[case] prefers_dark: Option<bool>, #[case] expected: Theme) {
        let probe = move || prefers_dark;

        assert_eq!(
            ThemeSetting::detect(&probe),
            ThemeSetting {
                value: expected,
                system: false
            }
        );
    }

    #[rstest]
    fn test_toggle_theme_keeps_system_flag() {
        let setting = ThemeSetting {
            value: Theme::Dark,
            system: true,
        };

        assert_eq!(
            setting.toggled(),
            ThemeSetting {
                value: Theme::Light,
                system: true
            }
        );
        assert_eq!(setting.toggled().toggled(), setting);
    }

    #[rstest]
    fn test_theme_setting_serialization() {
        assert_eq!(
            serde_json::to_string(&ThemeSetting {
                value: Theme::Light,
                system: false
            })
            .unwrap(),
            r#"{"value":"light","system":false}"#
        );
    }

    #[rstest]
    fn test_theme_display_and_parse() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("purple".parse::<Theme>().is_err());
    }
}

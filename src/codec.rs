use std::rc::Rc;

use log::warn;
use serde::{de::DeserializeOwned, ser::Error as _, Serialize};
use serde_json::Value;

use crate::preferences::{ColorSchemeProbe, Theme, ThemeSetting};

/// Converts a preference value to and from the text kept in storage.
pub trait PreferenceCodec<T> {
    fn parse(&self, text: &str) -> Result<T, serde_json::Error>;

    fn stringify(&self, value: &T) -> Result<String, serde_json::Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl<T> PreferenceCodec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn parse(&self, text: &str) -> Result<T, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn stringify(&self, value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }
}

/// JSON codec for numbers that must stay finite: JSON has no NaN or
/// infinity, so they would be written as `null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FiniteNumberCodec;

impl PreferenceCodec<f64> for FiniteNumberCodec {
    fn parse(&self, text: &str) -> Result<f64, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn stringify(&self, value: &f64) -> Result<String, serde_json::Error> {
        if !value.is_finite() {
            return Err(serde_json::Error::custom(format!(
                "{value} cannot be stored as a JSON number"
            )));
        }
        serde_json::to_string(value)
    }
}

/// Stores the string as is, `None` is written as an empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextCodec;

impl PreferenceCodec<Option<String>> for TextCodec {
    fn parse(&self, text: &str) -> Result<Option<String>, serde_json::Error> {
        Ok(Some(text.to_string()))
    }

    fn stringify(&self, value: &Option<String>) -> Result<String, serde_json::Error> {
        Ok(value.clone().unwrap_or_default())
    }
}

/// JSON codec for `color-theme` that checks the stored theme is known.
///
/// An unknown `value` is replaced by the theme detected from the OS colour
/// scheme at parse time, not by the default computed at startup.
pub struct ThemeCodec {
    probe: Rc<dyn ColorSchemeProbe>,
}

impl ThemeCodec {
    pub fn new(probe: Rc<dyn ColorSchemeProbe>) -> Self {
        Self { probe }
    }
}

impl PreferenceCodec<ThemeSetting> for ThemeCodec {
    fn parse(&self, text: &str) -> Result<ThemeSetting, serde_json::Error> {
        let stored: Value = serde_json::from_str(text)?;
        let theme = stored
            .get("value")
            .and_then(Value::as_str)
            .and_then(|value| value.parse::<Theme>().ok());

        let Some(value) = theme else {
            warn!("Unknown theme stored in `{text}`, detecting it from the system");
            return Ok(ThemeSetting::detect(self.probe.as_ref()));
        };

        Ok(ThemeSetting {
            value,
            system: stored
                .get("system")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        })
    }

    fn stringify(&self, value: &ThemeSetting) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn theme_codec(prefers_dark: Option<bool>) -> ThemeCodec {
        ThemeCodec::new(Rc::new(move || prefers_dark))
    }

    #[rstest]
    fn test_parse_valid_theme_setting() {
        assert_eq!(
            theme_codec(Some(true))
                .parse(r#"{"value":"light","system":true}"#)
                .unwrap(),
            ThemeSetting {
                value: Theme::Light,
                system: true
            }
        );
    }

    #[rstest]
    #[case::unknown_theme(r#"{"value":"purple","system":false}"#)]
    #[case::missing_theme(r#"{"system":true}"#)]
    #[case::bare_string(r#""dark""#)]
    fn test_parse_invalid_theme_setting_detects_system_theme(#[case] stored: &str) {
        assert_eq!(
            theme_codec(Some(false)).parse(stored).unwrap(),
            ThemeSetting {
                value: Theme::Light,
                system: false
            }
        );
    }

    #[rstest]
    fn test_parse_malformed_theme_setting() {
        assert!(theme_codec(None).parse("{value: dark").is_err());
    }

    #[rstest]
    fn test_text_codec_maps_none_to_empty_string() {
        assert_eq!(TextCodec.stringify(&None).unwrap(), "");
        assert_eq!(
            TextCodec.stringify(&Some("de-DE".to_string())).unwrap(),
            "de-DE"
        );
        assert_eq!(
            TextCodec.parse("de-DE").unwrap(),
            Some("de-DE".to_string())
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_finite_number_codec_rejects_non_finite_values(#[case] value: f64) {
        assert!(FiniteNumberCodec.stringify(&value).is_err());
    }

    #[rstest]
    fn test_finite_number_codec_round_trip() {
        assert_eq!(FiniteNumberCodec.stringify(&0.75).unwrap(), "0.75");
        assert_eq!(FiniteNumberCodec.parse("1").unwrap(), 1.0);
    }

    #[rstest]
    fn test_json_codec_rejects_mismatched_type() {
        let parsed: Result<bool, _> = JsonCodec.parse(r#""yes""#);
        assert!(parsed.is_err());
        let parsed: f64 = JsonCodec.parse("1").unwrap();
        assert_eq!(parsed, 1.0);
    }
}

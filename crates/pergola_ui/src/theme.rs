//! Provider theme configuration
//!
//! The theme is serialized into the root provider element's `theme` prop
//! and applied by the front end. Known fields are typed; anything else
//! passes through the flattened `extra` map. Server deployments usually
//! load a theme from a TOML document next to their configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Color scheme requested from the front end before user preference kicks in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Auto => "auto",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Theme document handed to the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_radius: Option<String>,
    /// Any further front-end theme attributes, passed through verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: Some("orange".into()),
            font_family: None,
            default_radius: None,
            extra: IndexMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme document: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Theme {
    pub fn new(primary_color: impl Into<String>) -> Self {
        Self {
            primary_color: Some(primary_color.into()),
            ..Self::default()
        }
    }

    /// Parse a theme from a TOML document.
    ///
    /// ```
    /// use pergola_ui::Theme;
    ///
    /// let theme = Theme::from_toml_str(r#"
    ///     primaryColor = "teal"
    ///     defaultRadius = "md"
    /// "#).unwrap();
    /// assert_eq!(theme.primary_color.as_deref(), Some("teal"));
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(document)?)
    }

    /// Wire form for the provider's `theme` prop.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_theme_is_orange() {
        assert_eq!(Theme::default().to_value(), json!({"primaryColor": "orange"}));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let theme = Theme {
            primary_color: None,
            ..Theme::default()
        };
        assert_eq!(theme.to_value(), json!({}));
    }

    #[test]
    fn test_toml_extra_fields_flatten() {
        let theme = Theme::from_toml_str(
            r#"
            primaryColor = "grape"
            cursorType = "pointer"
            "#,
        )
        .unwrap();
        assert_eq!(theme.extra.get("cursorType"), Some(&json!("pointer")));
        assert_eq!(
            theme.to_value(),
            json!({"primaryColor": "grape", "cursorType": "pointer"})
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Theme::from_toml_str("primaryColor = [").is_err());
    }
}

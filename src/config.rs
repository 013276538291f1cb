//! Theme configuration: storage key, marker class, indicator element, glyphs.
//!
//! Every field has a default matching the stock page markup, so a host page
//! only passes the fields it wants to change, as a JSON object.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::mode::ThemeMode;

pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";
pub const DEFAULT_INDICATOR_ID: &str = "darkBtn";
pub const DEFAULT_DARK_GLYPH: &str = "☀️";
pub const DEFAULT_LIGHT_GLYPH: &str = "🌙";

/// Element that carries the dark marker class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRoot {
    /// `document.body`.
    #[default]
    Body,
    /// `document.documentElement`.
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub indicator_id: String,
    /// Shown while dark mode is on (the next action is "go light").
    pub dark_glyph: String,
    /// Shown while light mode is on.
    pub light_glyph: String,
    pub root: ThemeRoot,
    /// Attach a click listener to the indicator. Turn off when the page
    /// already routes the button's own handler to `toggle()`.
    pub wire_click: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            indicator_id: DEFAULT_INDICATOR_ID.to_owned(),
            dark_glyph: DEFAULT_DARK_GLYPH.to_owned(),
            light_glyph: DEFAULT_LIGHT_GLYPH.to_owned(),
            root: ThemeRoot::Body,
            wire_click: true,
        }
    }
}

impl ThemeConfig {
    /// Build a config from a JSON object of overrides.
    ///
    /// Recognised keys: `storage_key`, `dark_class`, `indicator_id`,
    /// `dark_glyph`, `light_glyph`, `root` (`"body"` or `"html"`),
    /// `wire_click`.
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON, unknown keys, or
    /// values rejected by [`ThemeConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the identifiers are usable against real DOM and storage APIs.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        require_non_empty("storage_key", &self.storage_key)?;
        require_non_empty("dark_class", &self.dark_class)?;
        require_non_empty("indicator_id", &self.indicator_id)?;
        // classList.add throws on tokens containing whitespace.
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::Config(format!("dark_class must be a single class token, got '{}'", self.dark_class)));
        }
        Ok(())
    }

    /// Indicator glyph for `mode`.
    #[must_use]
    pub fn glyph(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Dark => &self.dark_glyph,
            ThemeMode::Light => &self.light_glyph,
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ThemeError> {
    if value.trim().is_empty() {
        return Err(ThemeError::Config(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

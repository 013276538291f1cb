//! The two-state theme value and its persisted flag encoding.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// Flag value written when dark mode is on.
pub const DARK_FLAG: &str = "1";
/// Flag value written when dark mode is off.
pub const LIGHT_FLAG: &str = "0";

/// Visual theme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Decode a stored flag.
    ///
    /// Only the literal `"1"` is dark. Absence, `"0"`, and anything
    /// unrecognised all read as light.
    #[must_use]
    pub fn from_flag(raw: Option<&str>) -> Self {
        match raw {
            Some(DARK_FLAG) => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn from_dark(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    /// Flag string persisted for this mode.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::Dark => DARK_FLAG,
            Self::Light => LIGHT_FLAG,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

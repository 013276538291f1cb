//! Theme controller: applies, toggles, and restores the dark/light mode.
//!
//! DESIGN
//! ======
//! The controller owns its storage and document backends and is built once
//! at startup, then handed to the load and click handlers. It holds no mode
//! of its own: the marker class on the root container is the live state and
//! the persisted flag is the state across reloads.

use crate::config::ThemeConfig;
use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::storage::PreferenceStore;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    document: D,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        Self { config, store, document }
    }

    /// Apply `enabled` as dark (`true`) or light (`false`).
    ///
    /// # Errors
    ///
    /// See [`ThemeController::apply`].
    pub fn apply_mode(&mut self, enabled: bool) -> Result<(), ThemeError> {
        self.apply(ThemeMode::from_dark(enabled))
    }

    /// Set the marker class, persist the flag, and update the indicator glyph.
    ///
    /// All three effects are attempted even if an earlier one fails, so a
    /// missing indicator element never prevents the theme from switching.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure; later failures are only logged.
    pub fn apply(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        let (theme, indicator) = self.apply_effects(mode, true);
        theme.and(indicator)
    }

    /// Invert the mode currently shown on the page.
    ///
    /// A failed glyph update is logged but does not fail the toggle: the
    /// marker and flag have already switched, and the new mode is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the current mode cannot be read from the document,
    /// or if setting the marker or persisting the flag fails.
    pub fn toggle(&mut self) -> Result<ThemeMode, ThemeError> {
        let next = self.current_mode()?.toggled();
        let (theme, _indicator) = self.apply_effects(next, true);
        theme?;
        Ok(next)
    }

    /// Restore the persisted mode; invoked once per page load.
    ///
    /// Only a stored `"1"` restores dark mode. An unreadable store shows the
    /// light theme but leaves the stored value untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if applying the restored mode fails.
    pub fn initialize(&mut self) -> Result<ThemeMode, ThemeError> {
        let (stored, persist) = match self.store.get(&self.config.storage_key) {
            Ok(stored) => (stored, true),
            Err(err) => {
                log::warn!("theme: reading '{}': {err}", self.config.storage_key);
                (None, false)
            }
        };
        let mode = ThemeMode::from_flag(stored.as_deref());
        let (theme, indicator) = self.apply_effects(mode, persist);
        theme.and(indicator)?;
        Ok(mode)
    }

    /// Run the marker, flag, and glyph effects, returning the first
    /// marker/flag failure and the glyph result separately.
    fn apply_effects(&mut self, mode: ThemeMode, persist: bool) -> (Result<(), ThemeError>, Result<(), ThemeError>) {
        let cfg = &self.config;
        let marker = self.document.set_marker(&cfg.dark_class, mode.is_dark());
        let flag = if persist { self.store.set(&cfg.storage_key, mode.flag()) } else { Ok(()) };
        let indicator = self.document.set_indicator(&cfg.indicator_id, cfg.glyph(mode));

        for err in [&marker, &flag, &indicator].into_iter().filter_map(|r| r.as_ref().err()) {
            log::warn!("theme: apply {mode:?}: {err}");
        }
        log::debug!("theme: applied {mode:?}");
        (marker.and(flag), indicator)
    }

    /// The mode implied by the marker class on the root container.
    ///
    /// # Errors
    ///
    /// Returns an error if the root container cannot be resolved.
    pub fn current_mode(&self) -> Result<ThemeMode, ThemeError> {
        let dark = self.document.has_marker(&self.config.dark_class)?;
        Ok(ThemeMode::from_dark(dark))
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Tear the controller apart, e.g. to simulate a reload in tests.
    #[must_use]
    pub fn into_parts(self) -> (ThemeConfig, S, D) {
        (self.config, self.store, self.document)
    }
}

//! Key-value backends for the persisted theme flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only needs string get/set on one key. The browser backend
//! wraps `window.localStorage`; the in-memory backend stands in for it in
//! native builds and tests.

use std::collections::HashMap;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// String-keyed persistent store.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

/// `HashMap`-backed store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, as if written by an earlier page load.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Borrow the stored value without going through the trait.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the current window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DocumentUnavailable`] outside a window context and
    /// [`ThemeError::StorageUnavailable`] when storage access is denied.
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::DocumentUnavailable)?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ThemeError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(crate::error::js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(crate::error::js_message(&e)))
    }
}

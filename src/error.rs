//! Error taxonomy for theme backends and configuration.

/// Failure reported by a storage or document backend, or by config parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The window has no `localStorage` (disabled or sandboxed).
    #[error("local storage is unavailable")]
    StorageUnavailable,
    /// A storage read or write threw.
    #[error("storage error: {0}")]
    Storage(String),
    /// There is no window or document to operate on.
    #[error("document is unavailable")]
    DocumentUnavailable,
    /// The configured root container (`<body>` or `<html>`) does not exist.
    #[error("root container is missing")]
    MissingRoot,
    /// No element carries the configured indicator id.
    #[error("element not found: #{id}")]
    MissingElement { id: String },
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// The supplied configuration is invalid.
    #[error("invalid theme config: {0}")]
    Config(String),
}

/// Best-effort text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub(crate) fn js_message(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

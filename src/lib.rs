//! # theme-toggle
//!
//! Dark/light theme switch for a web page, compiled to WebAssembly.
//!
//! The page's root container gets a `dark-mode` class, the choice is kept in
//! `localStorage` as `"1"`/`"0"`, and a toggle button shows the glyph for the
//! next action. Browser bindings live behind the `hydrate` feature; native
//! builds use the in-memory backends.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`]: apply, toggle, restore |
//! | [`mode`] | Two-state [`mode::ThemeMode`] and its flag encoding |
//! | [`config`] | Storage key, marker class, indicator id, glyphs |
//! | [`storage`] | Persisted flag backends |
//! | [`document`] | Marker class and indicator glyph backends |
//! | [`error`] | [`error::ThemeError`] |
//! | `browser` | WASM entry points (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod mode;
pub mod storage;

pub use config::{ThemeConfig, ThemeRoot};
pub use controller::ThemeController;
pub use error::ThemeError;
pub use mode::ThemeMode;

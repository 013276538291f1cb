//! Document backends: the dark marker on the root container and the
//! indicator glyph.
//!
//! TRADE-OFFS
//! ==========
//! The indicator glyph is written as `textContent`, not markup, so a
//! configured glyph can never inject elements into the page.

use std::collections::{HashMap, HashSet};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

/// The slice of the DOM the theme controller touches.
pub trait ThemeDocument {
    /// Whether the root container currently carries `class`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root container cannot be resolved.
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError>;

    /// Add (`present == true`) or remove `class` on the root container.
    ///
    /// # Errors
    ///
    /// Returns an error if the root container cannot be resolved or the
    /// class list rejects the token.
    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError>;

    /// Replace the displayed text of the element with id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingElement`] if no such element exists.
    fn set_indicator(&mut self, id: &str, glyph: &str) -> Result<(), ThemeError>;
}

/// In-memory document: a root class set plus registered elements by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    root_classes: Option<HashSet<String>>,
    elements: HashMap<String, String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self { root_classes: Some(HashSet::new()), elements: HashMap::new() }
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose root container is missing.
    #[must_use]
    pub fn without_root() -> Self {
        Self { root_classes: None, elements: HashMap::new() }
    }

    /// Register an element with empty text.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_owned(), String::new());
        self
    }

    /// Pre-set a class on the root container.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if let Some(classes) = self.root_classes.as_mut() {
            classes.insert(class.to_owned());
        }
        self
    }

    /// Text currently displayed by element `id`.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Whether the root container carries `class`; `false` without a root.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.root_classes.as_ref().is_some_and(|c| c.contains(class))
    }
}

impl ThemeDocument for MemoryDocument {
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        let classes = self.root_classes.as_ref().ok_or(ThemeError::MissingRoot)?;
        Ok(classes.contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        let classes = self.root_classes.as_mut().ok_or(ThemeError::MissingRoot)?;
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn set_indicator(&mut self, id: &str, glyph: &str) -> Result<(), ThemeError> {
        let text = self
            .elements
            .get_mut(id)
            .ok_or_else(|| ThemeError::MissingElement { id: id.to_owned() })?;
        glyph.clone_into(text);
        Ok(())
    }
}

/// The live page document.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
    root: crate::config::ThemeRoot,
}

#[cfg(feature = "hydrate")]
impl BrowserDocument {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DocumentUnavailable`] outside a window context.
    pub fn open(root: crate::config::ThemeRoot) -> Result<Self, ThemeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::DocumentUnavailable)?;
        Ok(Self { document, root })
    }

    #[must_use]
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn root_element(&self) -> Result<web_sys::Element, ThemeError> {
        use crate::config::ThemeRoot;

        // Resolved per call: <body> may not exist yet when the handle attaches.
        let el = match self.root {
            ThemeRoot::Body => self.document.body().map(web_sys::Element::from),
            ThemeRoot::Html => self.document.document_element(),
        };
        el.ok_or(ThemeError::MissingRoot)
    }
}

#[cfg(feature = "hydrate")]
impl ThemeDocument for BrowserDocument {
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.root_element()?.class_list().contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        let class_list = self.root_element()?.class_list();
        let res = if present { class_list.add_1(class) } else { class_list.remove_1(class) };
        res.map_err(|e| ThemeError::Dom(crate::error::js_message(&e)))
    }

    fn set_indicator(&mut self, id: &str, glyph: &str) -> Result<(), ThemeError> {
        let el = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::MissingElement { id: id.to_owned() })?;
        el.set_text_content(Some(glyph));
        Ok(())
    }
}

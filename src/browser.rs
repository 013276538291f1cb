//! WASM entry points: logger setup, page-ready hook, and click wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page loads the module and calls `ThemeHandle.attach()` once.
//! The handle owns the controller; the ready hook and the click listener
//! hold clones of the same `Rc`, so nothing is reachable through globals.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::document::BrowserDocument;
use crate::mode::ThemeMode;
use crate::storage::{LocalStore, MemoryStore, PreferenceStore};

pub type BrowserController = ThemeController<Box<dyn PreferenceStore>, BrowserDocument>;

/// Module start: panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module instance on the page already owns the logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// JS-facing handle to the page's theme controller.
#[wasm_bindgen]
pub struct ThemeHandle {
    controller: Rc<RefCell<BrowserController>>,
}

#[wasm_bindgen]
impl ThemeHandle {
    /// Build the controller and register the ready hook, plus a click
    /// listener on the indicator unless `wire_click` is `false` (for pages
    /// whose button already calls `toggle()` from its own handler).
    ///
    /// `config_json` is an optional JSON object of [`ThemeConfig`] overrides.
    ///
    /// # Errors
    ///
    /// Throws for an invalid config or when there is no document.
    pub fn attach(config_json: Option<String>) -> Result<ThemeHandle, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => ThemeConfig::from_json(raw)?,
            None => ThemeConfig::default(),
        };
        let document = BrowserDocument::open(config.root)?;
        let store: Box<dyn PreferenceStore> = match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(err) => {
                log::warn!("theme: {err}; preference will not persist");
                Box::new(MemoryStore::new())
            }
        };

        let page = document.document().clone();
        let controller = Rc::new(RefCell::new(ThemeController::new(config, store, document)));

        let ctl = Rc::clone(&controller);
        let ready_page = page.clone();
        on_ready(&page, move || {
            if let Err(err) = ctl.borrow_mut().initialize() {
                log::warn!("theme: initialize: {err}");
            }
            let (indicator_id, wire) = {
                let ctl = ctl.borrow();
                (ctl.config().indicator_id.clone(), ctl.config().wire_click)
            };
            if !wire {
                return;
            }
            match ready_page.get_element_by_id(&indicator_id) {
                Some(el) => wire_click(&el, Rc::clone(&ctl)),
                None => log::warn!("theme: no #{indicator_id} element, toggle is script-only"),
            }
        })?;

        log::info!("theme: attached");
        Ok(Self { controller })
    }

    /// Invert the theme; returns whether dark mode is now on.
    pub fn toggle(&self) -> bool {
        let mut ctl = self.controller.borrow_mut();
        match ctl.toggle() {
            Ok(mode) => mode.is_dark(),
            Err(err) => {
                log::warn!("theme: toggle: {err}");
                ctl.current_mode().is_ok_and(ThemeMode::is_dark)
            }
        }
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.controller.borrow().current_mode().is_ok_and(ThemeMode::is_dark)
    }
}

/// Run `f` once the DOM is parsed: now, or on `DOMContentLoaded`.
fn on_ready(page: &web_sys::Document, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    if page.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    page.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
}

/// Marks an indicator that already carries a toggle listener.
const WIRED_ATTR: &str = "data-theme-toggle-wired";

fn wire_click(el: &web_sys::Element, ctl: Rc<RefCell<BrowserController>>) {
    // A second attach on the same page must not double-toggle each click.
    if el.has_attribute(WIRED_ATTR) {
        log::debug!("theme: click listener already present");
        return;
    }
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Err(err) = ctl.borrow_mut().toggle() {
            log::warn!("theme: toggle: {err}");
        }
    });
    if let Err(err) = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        log::warn!("theme: click listener: {}", crate::error::js_message(&err));
        return;
    }
    if let Err(err) = el.set_attribute(WIRED_ATTR, "") {
        log::warn!("theme: marking indicator: {}", crate::error::js_message(&err));
    }
    // Listener lives as long as the page.
    cb.forget();
}

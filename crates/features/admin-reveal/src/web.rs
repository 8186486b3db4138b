//! Browser binding: wires [`AdminReveal`] onto the server-rendered login page.
//!
//! The page loads the generated module and calls `installAdminReveal()`.
//! Installation waits for `DOMContentLoaded` when the document is still
//! parsing.

use crate::error::RevealError;
use crate::gate::Threshold;
use crate::page::{AdminReveal, Page};
use crate::view::Display;
use jdash_domain::config::RevealConfig;
use std::borrow::Cow;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, console};

/// [`Page`] over the live `document`.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document.
    ///
    /// # Errors
    /// [`RevealError::Binding`] outside a browser window.
    pub fn current() -> Result<Self, RevealError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| RevealError::Binding { message: "no document".into(), context: None })
    }
}

impl Page for DomPage {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn query_selector(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn set_display(&mut self, element: &HtmlElement, display: Display) {
        if let Err(err) = element.style().set_property("display", display.as_ref()) {
            console::warn_2(&JsValue::from_str("Failed to set display:"), &err);
        }
    }
}

/// Installs the reveal on the current document.
///
/// Returns `Ok(false)` when the page lacks the trigger or either section.
///
/// # Errors
/// [`RevealError::InvalidThreshold`] for a zero threshold, [`RevealError::Binding`]
/// when there is no document or the listener cannot be attached.
pub fn install(config: &RevealConfig) -> Result<bool, RevealError> {
    let threshold = Threshold::try_from(config.threshold)?;
    let mut page = DomPage::current()?;

    let Some(mut reveal) = AdminReveal::install(&page, &config.targets, threshold) else {
        return Ok(false);
    };
    let trigger = reveal.trigger().clone();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let outcome = reveal.handle_click(&mut page);
        console::log_2(
            &JsValue::from_str("Login trigger clicked. Count:"),
            &JsValue::from(outcome.count()),
        );
        if outcome.prevents_default() {
            event.prevent_default();
        }
    });

    trigger
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| binding_error(&err, "Attaching trigger click listener"))?;
    // The listener lives as long as the page.
    on_click.forget();

    Ok(true)
}

/// JS entry point: installs with the default login page configuration.
///
/// # Errors
/// The [`RevealError`] of [`install`], rendered as a JS string.
#[wasm_bindgen(js_name = installAdminReveal)]
pub fn start() -> Result<(), JsValue> {
    let page = DomPage::current().map_err(to_js)?;

    if page.document.ready_state() != "loading" {
        return install(&RevealConfig::default()).map(drop).map_err(to_js);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = install(&RevealConfig::default()) {
            console::error_1(&to_js(err));
        }
    });
    page.document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|err| to_js(binding_error(&err, "Waiting for DOMContentLoaded")))
}

fn binding_error(err: &JsValue, context: &'static str) -> RevealError {
    RevealError::Binding {
        message: Cow::Owned(err.as_string().unwrap_or_else(|| format!("{err:?}"))),
        context: Some(context.into()),
    }
}

fn to_js(err: RevealError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

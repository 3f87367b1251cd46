//! Contact Form WASM
//!
//! Browser bindings for the contact form controller. On load the module wires
//! the page's `#contactForm` to a [`contact_form::FormController`] and starts
//! logging connectivity changes. The field rules are also exported so other
//! scripts can validate with the same logic.

use contact_form::network::{self, NetworkStatus};
use contact_form::{basic_auth_header, validate, FieldName, UnknownField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

pub mod dom;

use dom::MountedForm;

/// Entry point: mount the form once the DOM is ready
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    watch_network_status(&window)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                mount_or_report(&document);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        mount_or_report(&document);
    }
    Ok(())
}

fn mount_or_report(document: &web_sys::Document) {
    if let Err(err) = MountedForm::mount(document) {
        web_sys::console::error_2(&"Contact form not mounted:".into(), &err);
    }
}

/// Log `online`/`offline` events; connectivity never changes form behaviour
fn watch_network_status(window: &web_sys::Window) -> Result<(), JsValue> {
    for (event, status) in [
        ("online", NetworkStatus::Online),
        ("offline", NetworkStatus::Offline),
    ] {
        let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let line = network::report(status);
            web_sys::console::log_1(&line.into());
        });
        window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }
    Ok(())
}

/// Validate a single field value
///
/// # Returns
/// `{ valid, message }`; `message` is empty when valid
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, message } = validateField('username', 'ab');
/// // valid === false, message === 'Username must be at least 3 characters'
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    let field: FieldName = field_name
        .parse()
        .map_err(|e: UnknownField| JsValue::from_str(&e.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&validate(field, value))?)
}

/// `Basic <base64(username:password)>`
#[wasm_bindgen(js_name = basicAuthHeader)]
pub fn basic_auth_header_js(username: &str, password: &str) -> String {
    basic_auth_header(username, password)
}

//! URL source backed by the extension's background page.
//!
//! Content scripts cannot read the clipboard directly, so the url binding
//! sends `{text: <tag>}` over `chrome.runtime.sendMessage` and the
//! background page answers `{val: <clipboard text>}`.

use dic_editor_core::{UrlCallback, UrlSource};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = sendMessage, catch)]
    fn send_message(message: &JsValue, response_callback: &JsValue) -> Result<(), JsValue>;
}

/// Asks the background page for the clipboard contents.
#[derive(Debug, Clone)]
pub struct ExtensionUrlSource {
    message_tag: String,
}

impl ExtensionUrlSource {
    pub fn new(message_tag: impl Into<String>) -> Self {
        Self {
            message_tag: message_tag.into(),
        }
    }

    fn message(&self) -> Result<JsValue, JsValue> {
        let message = Object::new();
        Reflect::set(
            &message,
            &JsValue::from_str("text"),
            &JsValue::from_str(&self.message_tag),
        )?;
        Ok(message.into())
    }
}

impl UrlSource for ExtensionUrlSource {
    fn request_url(&self, on_value: UrlCallback) {
        let message = match self.message() {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("failed to build url request: {:?}", e);
                return;
            }
        };

        let on_response = Closure::once_into_js(move |response: JsValue| {
            if let Some(error) = runtime_last_error() {
                tracing::warn!("url request failed: {:?}", error);
                on_value(None);
                return;
            }
            let value = response_value(&response);
            if value.is_none() {
                tracing::warn!("url response carried no value");
            }
            on_value(value);
        });

        if let Err(e) = send_message(&message, &on_response) {
            tracing::warn!("extension messaging unavailable: {:?}", e);
        }
    }
}

/// The `val` string of a background-page response.
pub fn response_value(response: &JsValue) -> Option<String> {
    if response.is_undefined() || response.is_null() {
        return None;
    }
    Reflect::get(response, &JsValue::from_str("val"))
        .ok()
        .and_then(|v| v.as_string())
}

/// `chrome.runtime.lastError`, if set.
fn runtime_last_error() -> Option<JsValue> {
    let global = js_sys::global();
    let chrome = Reflect::get(&global, &JsValue::from_str("chrome")).ok()?;
    if chrome.is_undefined() {
        return None;
    }
    let runtime = Reflect::get(&chrome, &JsValue::from_str("runtime")).ok()?;
    if runtime.is_undefined() {
        return None;
    }
    Reflect::get(&runtime, &JsValue::from_str("lastError"))
        .ok()
        .filter(|e| !e.is_undefined() && !e.is_null())
}

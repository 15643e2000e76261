//! Friends lookup for the member picker.
//!
//! The forum answers `?showuser=<id>` with the member's profile as XML;
//! friend names sit under `friends > user > name`.

use dic_editor_core::{PlatformError, SmolStr};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomParser, Response, SupportedType};

use crate::js_error;

/// Selector for friend names in the profile XML.
pub const FRIEND_NAME_SELECTOR: &str = "friends user name";

/// Extract friend names from a profile XML document.
pub fn parse_friend_names(xml: &str) -> Result<Vec<SmolStr>, PlatformError> {
    let parser = DomParser::new().map_err(js_error)?;
    let doc = parser
        .parse_from_string(xml, SupportedType::TextXml)
        .map_err(js_error)?;
    let nodes = doc
        .query_selector_all(FRIEND_NAME_SELECTOR)
        .map_err(js_error)?;

    let names = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .map(|name| SmolStr::new(name.trim()))
        .filter(|name| !name.is_empty())
        .collect();
    Ok(names)
}

/// Fetch and parse the friends of the user behind `url`.
pub async fn fetch_friend_names(url: &str) -> Result<Vec<SmolStr>, PlatformError> {
    let window = web_sys::window().ok_or_else(|| PlatformError::from("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(PlatformError(format!(
            "friends lookup returned HTTP {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| PlatformError::from("friends response was not text"))?;
    parse_friend_names(&text)
}

/// Fetch friends, logging failures and returning an empty list instead.
pub async fn friend_names_or_empty(url: &str) -> Vec<SmolStr> {
    match fetch_friend_names(url).await {
        Ok(names) => {
            tracing::debug!(count = names.len(), "friends loaded");
            names
        }
        Err(e) => {
            tracing::warn!(url, "friends lookup failed: {}", e);
            Vec::new()
        }
    }
}

//! Finding editors on the page, now and as the forum adds them.

use dic_editor_core::PlatformError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord};

use crate::js_error;
use crate::surface::TextAreaSurface;

/// All textareas matching `selector`, in document order.
pub fn query_textareas(document: &Document, selector: &str) -> Vec<TextAreaSurface> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .map(TextAreaSurface::new)
        .collect()
}

/// All elements matching `selector`, in document order.
///
/// An invalid selector is logged and matches nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::warn!(selector, "selector query failed: {:?}", e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Whether any node added by `records` is an element carrying `class`.
pub fn added_element_with_class(records: &js_sys::Array, class: &str) -> bool {
    records.iter().any(|record| {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            return false;
        };
        let added = record.added_nodes();
        (0..added.length())
            .filter_map(|i| added.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .any(|el| el.class_list().contains(class))
    })
}

/// Call `on_new_editor` whenever an element with `class` is added below a
/// container matching `container_selector`.
///
/// Returns the observers; they stay active for the life of the page whether
/// or not the caller keeps them.
pub fn observe_new_editors<F>(
    document: &Document,
    container_selector: &str,
    class: &str,
    on_new_editor: F,
) -> Result<Vec<MutationObserver>, PlatformError>
where
    F: Fn() + 'static,
{
    let class = class.to_owned();
    // Shared by every observer and needed until the page unloads.
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            if added_element_with_class(&records, &class) {
                tracing::debug!(class = %class, "editor container inserted");
                on_new_editor();
            }
        },
    )
    .into_js_value();

    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);

    let mut observers = Vec::new();
    for container in query_all(document, container_selector) {
        let observer = MutationObserver::new(callback.unchecked_ref()).map_err(js_error)?;
        observer
            .observe_with_options(&container, &init)
            .map_err(js_error)?;
        observers.push(observer);
    }
    tracing::debug!(containers = observers.len(), "watching for new editors");
    Ok(observers)
}

//! Browser content script for the forum editor bindings.
//!
//! This crate wires `dic-editor-core` to the page. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: `TextSurface` over `<textarea>` with UTF-16 offset conversion
//! - `events`: keyboard event extraction and default/propagation control
//! - `discovery`: editor queries and the `MutationObserver` watching for new ones
//! - `dialog`: the member picker dialog
//! - `friends`: friend names for the picker's suggestions
//! - `clipboard`: URL source over extension messaging
//! - `logging`: `tracing` to the browser console
//!
//! # Re-exports
//!
//! This crate re-exports `dic-editor-core` for convenience.

pub use dic_editor_core;
pub use dic_editor_core::*;

pub mod clipboard;
pub mod dialog;
pub mod discovery;
pub mod events;
pub mod friends;
pub mod logging;
pub mod surface;

pub use clipboard::ExtensionUrlSource;
pub use dialog::{DialogMemberPicker, MemberDialog};
pub use events::{DomEventControl, event_kind, key_input};
pub use surface::TextAreaSurface;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNING: RefCell<Option<Rc<ContentScript>>> = const { RefCell::new(None) };
}

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init_logging();
}

/// Start the content script with the built-in configuration.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    launch(ContentConfig::default())
}

/// Start the content script, overriding configuration fields from a JS
/// object (camelCase keys, missing keys keep their defaults).
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(overrides: JsValue) -> Result<(), JsValue> {
    let config: ContentConfig = if overrides.is_undefined() || overrides.is_null() {
        ContentConfig::default()
    } else {
        serde_wasm_bindgen::from_value(overrides)
            .map_err(|e| to_js(ConfigError::Invalid(e.to_string())))?
    };
    launch(config)
}

fn launch(config: ContentConfig) -> Result<(), JsValue> {
    config.validate().map_err(to_js)?;
    let script = ContentScript::new(config).map_err(to_js)?;

    let document = document().map_err(to_js)?;
    if document.ready_state() == "loading" {
        // The slot is held while waiting so a second start is still refused.
        run_exclusive(script, |script| {
            let script = script.clone();
            EventListener::once(&document, "DOMContentLoaded", move |_| {
                if let Err(e) = script.attach() {
                    tracing::error!("content script failed to start: {}", e);
                    release_slot();
                }
            })
            .forget();
            Ok(())
        })
        .map_err(to_js)
    } else {
        run_exclusive(script, |script| script.attach()).map_err(to_js)
    }
}

/// Run `attach` as the page's only content script.
///
/// Refused while another script holds the slot. A failed `attach` releases
/// the slot again so a later start can retry.
fn run_exclusive<F>(script: Rc<ContentScript>, attach: F) -> Result<(), PlatformError>
where
    F: FnOnce(&Rc<ContentScript>) -> Result<(), PlatformError>,
{
    let claimed = RUNNING.with(|running| {
        let mut running = running.borrow_mut();
        if running.is_some() {
            return false;
        }
        *running = Some(script.clone());
        true
    });
    if !claimed {
        return Err(PlatformError::from("content script already started"));
    }

    let attached = attach(&script);
    if attached.is_err() {
        release_slot();
    }
    attached
}

fn release_slot() {
    RUNNING.with(|running| running.borrow_mut().take());
}

/// The running content script: the editors found so far, the binding
/// table and the host configuration.
pub struct ContentScript {
    config: Rc<ContentConfig>,
    registry: Rc<RefCell<EditorRegistry<TextAreaSurface>>>,
    keymap: Rc<Keymap>,
}

impl ContentScript {
    /// Build the script with the browser collaborators for the member and
    /// url bindings.
    pub fn new(config: ContentConfig) -> Result<Rc<Self>, PlatformError> {
        let config = Rc::new(config);
        let registry = Rc::new(RefCell::new(EditorRegistry::<TextAreaSurface>::new()));

        let refocus_registry = registry.clone();
        let refocus: Rc<dyn Fn()> = Rc::new(move || {
            let active = refocus_registry.borrow().active().cloned();
            if let Some(editor) = active {
                editor.surface().focus();
            }
        });
        let picker = Rc::new(DialogMemberPicker::new(config.clone(), refocus));
        let url_source = Rc::new(ExtensionUrlSource::new(config.url_message_tag.clone()));
        let keymap = default_keymap(picker, url_source)
            .map_err(|e| PlatformError(format!("binding table rejected: {e}")))?;

        Ok(Rc::new(Self {
            config,
            registry,
            keymap: Rc::new(keymap),
        }))
    }

    /// Build the script around an existing keymap.
    pub fn with_keymap(config: ContentConfig, keymap: Keymap) -> Rc<Self> {
        Rc::new(Self {
            config: Rc::new(config),
            registry: Rc::new(RefCell::new(EditorRegistry::new())),
            keymap: Rc::new(keymap),
        })
    }

    pub fn registry(&self) -> &Rc<RefCell<EditorRegistry<TextAreaSurface>>> {
        &self.registry
    }

    /// Bind the editors already on the page and watch for new ones.
    pub fn attach(self: &Rc<Self>) -> Result<(), PlatformError> {
        let document = document()?;
        self.rescan(&document);

        let script = self.clone();
        discovery::observe_new_editors(
            &document,
            &self.config.post_container_selector,
            &self.config.new_editor_class,
            move || match crate::document() {
                Ok(document) => {
                    script.rescan(&document);
                }
                Err(e) => tracing::warn!("rescan skipped: {}", e),
            },
        )?;

        tracing::info!(
            editors = self.registry.borrow().len(),
            bindings = self.keymap.len(),
            "editor bindings attached"
        );
        Ok(())
    }

    /// Register editors not seen before and install their listeners.
    ///
    /// Returns how many editors were added.
    pub fn rescan(self: &Rc<Self>, document: &web_sys::Document) -> usize {
        let surfaces = discovery::query_textareas(document, &self.config.editor_selector);
        let added = self.registry.borrow_mut().discover(surfaces);
        for editor in &added {
            self.install(editor.surface());
        }
        added.len()
    }

    /// Dispatch a keyboard event to the active editor.
    pub fn handle_key(&self, event: &web_sys::KeyboardEvent) -> DispatchResult {
        let Some(kind) = event_kind(&event.type_()) else {
            return DispatchResult::NotHandled;
        };
        // Bindings may re-enter the registry through their completions.
        let active = self.registry.borrow().active().cloned();
        let Some(editor) = active else {
            return DispatchResult::NotHandled;
        };
        self.keymap
            .dispatch(kind, &key_input(event), &editor, &DomEventControl(event))
    }

    fn install(self: &Rc<Self>, surface: &TextAreaSurface) {
        let element = surface.element();

        for activation in ["focus", "click"] {
            let registry = self.registry.clone();
            let surface = surface.clone();
            EventListener::new(element, activation, move |_| {
                registry.borrow_mut().activate(&surface);
            })
            .forget();
        }

        for kind in [EventKind::KeyDown, EventKind::KeyUp] {
            if !self.keymap.listens_to(kind) {
                continue;
            }
            let script = self.clone();
            EventListener::new_with_options(
                element,
                kind.dom_name(),
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                        script.handle_key(event);
                    }
                },
            )
            .forget();
        }
    }
}

pub(crate) fn document() -> Result<web_sys::Document, PlatformError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlatformError::from("no document"))
}

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub(crate) fn js_error(value: JsValue) -> PlatformError {
    PlatformError(format!("{value:?}"))
}

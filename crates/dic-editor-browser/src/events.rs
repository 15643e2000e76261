//! Keyboard event extraction and control.

use dic_editor_core::{EventControl, EventKind, KeyInput};

/// Read the key and modifier state from a browser keyboard event.
pub fn key_input(event: &web_sys::KeyboardEvent) -> KeyInput {
    KeyInput::from_dom(
        &event.key(),
        event.ctrl_key(),
        event.alt_key(),
        event.shift_key(),
        event.meta_key(),
    )
}

/// Map a DOM event type to the event kind bindings listen on.
pub fn event_kind(event_type: &str) -> Option<EventKind> {
    match event_type {
        "keydown" => Some(EventKind::KeyDown),
        "keyup" => Some(EventKind::KeyUp),
        _ => None,
    }
}

/// `EventControl` backed by a DOM event.
pub struct DomEventControl<'a>(pub &'a web_sys::Event);

impl EventControl for DomEventControl<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

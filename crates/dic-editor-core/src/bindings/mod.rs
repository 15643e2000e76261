//! Keyboard bindings and their dispatch.
//!
//! A `Binding` maps a hotkey on one keyboard event kind to a text mutation
//! on an editor. Bindings never remember an editor: the `Keymap` hands each
//! one the currently active editor when its hotkey fires.

mod macros;
mod member;
mod tab;
mod tag;
mod url;

pub use macros::MacroBinding;
pub use member::{MEMBER_TAG, MemberTagBinding, insert_member_name};
pub use tab::{INDENT, TabBinding, indent_lines};
pub use tag::{TagBinding, TagPair};
pub use url::{URL_END_TAG, URL_START_TAG, UrlTagBinding};

use crate::editor::Editor;
use crate::keys::{EventKind, Hotkey, KeyInput};
use crate::text::TextSurface;

/// Control over the native key event being dispatched.
///
/// The browser implementation forwards to `preventDefault` and
/// `stopPropagation` on the `KeyboardEvent`.
pub trait EventControl {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// Event control that does nothing, for synthetic input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEventControl;

impl EventControl for NoEventControl {
    fn prevent_default(&self) {}
    fn stop_propagation(&self) {}
}

/// Result of dispatching a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// At least one binding fired; default and propagation were suppressed.
    Handled,
    /// No binding matched, the event continues normally.
    NotHandled,
}

/// All binding behaviors.
#[derive(Debug, Clone)]
pub enum Binding {
    Tag(TagBinding),
    MemberTag(MemberTagBinding),
    UrlTag(UrlTagBinding),
    Macro(MacroBinding),
    Tab(TabBinding),
}

impl Binding {
    /// The keyboard event this binding listens to.
    pub fn event_kind(&self) -> EventKind {
        match self {
            Self::Macro(_) => EventKind::KeyUp,
            Self::Tag(_) | Self::MemberTag(_) | Self::UrlTag(_) | Self::Tab(_) => {
                EventKind::KeyDown
            }
        }
    }

    pub fn hotkey(&self) -> &Hotkey {
        match self {
            Self::Tag(b) => b.hotkey(),
            Self::MemberTag(b) => b.hotkey(),
            Self::UrlTag(b) => b.hotkey(),
            Self::Macro(b) => b.hotkey(),
            Self::Tab(b) => b.hotkey(),
        }
    }

    /// Whether this binding fires for `input` on an event of `kind`.
    pub fn matches(&self, kind: EventKind, input: &KeyInput) -> bool {
        self.event_kind() == kind && self.hotkey().matches(input)
    }

    /// Apply the binding's mutation to `editor`.
    pub fn apply<S: TextSurface>(&self, editor: &Editor<S>) {
        match self {
            Self::Tag(b) => b.apply(editor),
            Self::MemberTag(b) => b.apply(editor),
            Self::UrlTag(b) => b.apply(editor),
            Self::Macro(b) => b.apply(editor),
            Self::Tab(b) => b.apply(editor),
        }
    }

    /// Short human-readable description, used in logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Tag(b) => {
                let tags = b.tags();
                format!(
                    "{} -> {}{}",
                    b.hotkey(),
                    tags.start.as_deref().unwrap_or(""),
                    tags.end.as_deref().unwrap_or("")
                )
            }
            Self::MemberTag(b) => format!("{} -> member tag", b.hotkey()),
            Self::UrlTag(b) => format!("{} -> url tag", b.hotkey()),
            Self::Macro(b) => format!(
                "{} -> /{}/ => {:?}",
                b.hotkey(),
                b.macro_pattern(),
                b.expansion()
            ),
            Self::Tab(b) => format!("{} -> indent", b.hotkey()),
        }
    }
}

impl From<TagBinding> for Binding {
    fn from(b: TagBinding) -> Self {
        Self::Tag(b)
    }
}

impl From<MemberTagBinding> for Binding {
    fn from(b: MemberTagBinding) -> Self {
        Self::MemberTag(b)
    }
}

impl From<UrlTagBinding> for Binding {
    fn from(b: UrlTagBinding) -> Self {
        Self::UrlTag(b)
    }
}

impl From<MacroBinding> for Binding {
    fn from(b: MacroBinding) -> Self {
        Self::Macro(b)
    }
}

impl From<TabBinding> for Binding {
    fn from(b: TabBinding) -> Self {
        Self::Tab(b)
    }
}

/// The fixed list of bindings installed on every editor.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether any binding listens to events of `kind`.
    pub fn listens_to(&self, kind: EventKind) -> bool {
        self.bindings.iter().any(|b| b.event_kind() == kind)
    }

    /// Dispatch one key event to `editor`.
    ///
    /// Every matching binding fires, in table order. Default action and
    /// propagation are suppressed before the first mutation.
    pub fn dispatch<S: TextSurface>(
        &self,
        kind: EventKind,
        input: &KeyInput,
        editor: &Editor<S>,
        control: &dyn EventControl,
    ) -> DispatchResult {
        let mut result = DispatchResult::NotHandled;
        for binding in self.bindings.iter().filter(|b| b.matches(kind, input)) {
            if result == DispatchResult::NotHandled {
                control.prevent_default();
                control.stop_propagation();
                result = DispatchResult::Handled;
            }
            tracing::debug!(binding = %binding.describe(), "binding fired");
            binding.apply(editor);
        }
        result
    }
}

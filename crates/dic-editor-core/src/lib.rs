//! dic-editor-core: keyboard bindings for forum textareas, without DOM
//! dependencies.
//!
//! This crate provides:
//! - `TextSurface` trait over a plain-text input, with `MemorySurface`
//! - `Cursor` and `Editor` views over a surface
//! - `Binding` variants (tags, member tag, url tag, macros, tab) and the
//!   `Keymap` that dispatches key events to them
//! - `EditorRegistry` tracking the page's editors and the active one
//! - The fixed binding table and the content-script configuration

pub mod bindings;
pub mod config;
pub mod cursor;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod keys;
pub mod members;
pub mod platform;
pub mod registry;
pub mod text;

pub use bindings::{
    Binding, DispatchResult, EventControl, Keymap, MacroBinding, MemberTagBinding,
    NoEventControl, TabBinding, TagBinding, TagPair, UrlTagBinding,
};
pub use config::ContentConfig;
pub use cursor::{Cursor, SelectionRange};
pub use defaults::default_keymap;
pub use editor::Editor;
pub use error::{BindingError, ConfigError, HotkeyParseError};
pub use keys::{EventKind, Hotkey, Key, KeyInput, Modifiers};
pub use members::{MemberCandidates, collect_page_users};
pub use platform::{
    FixedAnswer, MemberPicker, NoMemberPicker, NoUrlSource, PickCallback, PlatformError,
    UrlCallback, UrlSource,
};
pub use registry::EditorRegistry;
pub use smol_str::SmolStr;
pub use text::{MemorySurface, TextSurface};

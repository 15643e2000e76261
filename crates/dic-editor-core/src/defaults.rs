//! The fixed binding table.

use std::rc::Rc;

use crate::bindings::{
    Binding, Keymap, MacroBinding, MemberTagBinding, TabBinding, TagBinding, TagPair,
    UrlTagBinding,
};
use crate::error::BindingError;
use crate::keys::Hotkey;
use crate::platform::{MemberPicker, UrlSource};

/// Plain tag bindings: hotkey and tag name.
pub const TAG_BINDINGS: &[(&str, &str)] = &[
    ("ctrl+b", "b"),
    ("ctrl+i", "i"),
    ("ctrl+u", "u"),
    ("ctrl+k", "il"),
    ("ctrl+q", "quote"),
    ("ctrl+p", "img"),
    ("ctrl+shift+c", "code"),
];

pub const MEMBER_HOTKEY: &str = "ctrl+m";
pub const URL_HOTKEY: &str = "ctrl+l";

/// Macros: hotkey, text, expansion.
pub const MACROS: &[(&str, &str, &str)] = &[
    ("space", "asap", "as soon as possible"),
    ("space", "lol", "laugh out loud"),
];

/// Build the keymap installed on every editor.
pub fn default_keymap(
    picker: Rc<dyn MemberPicker>,
    url_source: Rc<dyn UrlSource>,
) -> Result<Keymap, BindingError> {
    let mut bindings: Vec<Binding> = Vec::with_capacity(TAG_BINDINGS.len() + MACROS.len() + 3);

    for (hotkey, name) in TAG_BINDINGS {
        bindings.push(TagBinding::new(Hotkey::parse(hotkey)?, TagPair::named(name)).into());
    }
    bindings.push(MemberTagBinding::new(Hotkey::parse(MEMBER_HOTKEY)?, picker).into());
    bindings.push(UrlTagBinding::new(Hotkey::parse(URL_HOTKEY)?, url_source).into());
    bindings.push(TabBinding::new().into());
    for (hotkey, text, expand) in MACROS {
        bindings.push(MacroBinding::literal(Hotkey::parse(hotkey)?, text, *expand)?.into());
    }

    Ok(Keymap::new(bindings))
}

//! The member tag: `[member='name']` with a name picked from a dialog.

use std::rc::Rc;

use smol_str::SmolStr;

use super::tag::{TagPair, apply_tags};
use crate::editor::Editor;
use crate::keys::Hotkey;
use crate::platform::MemberPicker;
use crate::text::{TextSurface, char_len, insert_at, slice_chars};

/// Opening member tag; there is no closing tag.
pub const MEMBER_TAG: &str = "[member='']";

/// Inserts the member tag at the cursor (or before the selection), puts the
/// cursor between its quotes and asks the picker for a member name.
#[derive(Clone)]
pub struct MemberTagBinding {
    hotkey: Hotkey,
    tags: TagPair,
    picker: Rc<dyn MemberPicker>,
}

impl MemberTagBinding {
    pub fn new(hotkey: Hotkey, picker: Rc<dyn MemberPicker>) -> Self {
        Self {
            hotkey,
            tags: TagPair::new(Some(MEMBER_TAG), None),
            picker,
        }
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn tags(&self) -> &TagPair {
        &self.tags
    }

    pub fn apply<S: TextSurface>(&self, editor: &Editor<S>) {
        // With or without a selection the tag goes in at the selection start.
        let tag_start = editor.cursor().position();
        apply_tags(&self.tags, editor);

        let inside_quotes = tag_start + self.tags.caret_anchor();
        editor.cursor().collapse(inside_quotes);

        let target = editor.clone();
        let closer = SmolStr::new(self.tags.attribute_closer());
        self.picker.pick_member(Box::new(move |name| {
            insert_member_name(&target, &name, &closer);
        }));
    }
}

impl std::fmt::Debug for MemberTagBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberTagBinding")
            .field("hotkey", &self.hotkey)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Insert `name` at the cursor of `editor`, then a space after the tag's
/// closer, leaving the cursor after that space.
///
/// If the closer no longer follows the cursor (the user moved on before
/// picking), only the name is inserted and the cursor lands after it.
pub fn insert_member_name<S: TextSurface>(editor: &Editor<S>, name: &str, closer: &str) {
    if name.is_empty() {
        tracing::debug!("empty member name, nothing inserted");
        return;
    }

    let position = editor.cursor().position();
    let name_len = char_len(name);
    let closer_len = char_len(closer);
    let mut content = insert_at(&editor.content(), position, name);

    let after_name = position + name_len;
    let landing = if slice_chars(&content, after_name, after_name + closer_len) == closer {
        content = insert_at(&content, after_name + closer_len, " ");
        after_name + closer_len + 1
    } else {
        after_name
    };

    tracing::debug!(name, position, landing, "member name inserted");
    editor.set_content(&content);
    editor.cursor().collapse(landing);
}

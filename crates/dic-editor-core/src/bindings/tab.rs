//! Tab indentation.

use std::sync::LazyLock;

use regex::Regex;

use crate::editor::Editor;
use crate::keys::{Hotkey, Key};
use crate::text::{TextSurface, insert_at, replace_chars, slice_chars};

pub const INDENT: &str = "\t";

/// A line break plus the tabs already indenting the following line.
static LINE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\n\t*)").unwrap());

/// Indent the selected lines, or insert a tab at the cursor.
#[derive(Debug, Clone)]
pub struct TabBinding {
    hotkey: Hotkey,
}

impl Default for TabBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBinding {
    pub fn new() -> Self {
        Self {
            hotkey: Hotkey::new(Key::Tab),
        }
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn apply<S: TextSurface>(&self, editor: &Editor<S>) {
        let cursor = editor.cursor();
        let position = cursor.position();
        let content = editor.content();

        let updated = if cursor.has_selection() {
            let range = cursor.selection_range();
            let selected = slice_chars(&content, range.start, range.end);
            replace_chars(&content, range.start, range.end, &indent_lines(&selected))
        } else {
            insert_at(&content, position, INDENT)
        };

        editor.set_content(&updated);
        cursor.collapse(position + 1);
    }
}

/// Prefix `text` with one indent and add one after every line break.
pub fn indent_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(INDENT);
    out.push_str(&LINE_INDENT.replace_all(text, format!("${{1}}{INDENT}").as_str()));
    out
}

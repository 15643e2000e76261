//! Text macros: replace every occurrence of a sequence with its expansion.

use regex::{NoExpand, Regex};

use crate::editor::Editor;
use crate::error::BindingError;
use crate::keys::Hotkey;
use crate::text::{TextSurface, char_len};

/// A MacroBinding replaces a character sequence or regular expression with
/// another character sequence. All instances are replaced on each firing.
///
/// Macros fire on key-up, after the triggering key has reached the text.
#[derive(Debug, Clone)]
pub struct MacroBinding {
    hotkey: Hotkey,
    pattern: Regex,
    expand: String,
}

impl MacroBinding {
    /// Replace the literal `text`.
    pub fn literal(
        hotkey: Hotkey,
        text: &str,
        expand: impl Into<String>,
    ) -> Result<Self, BindingError> {
        Self::pattern(hotkey, &regex::escape(text), expand)
    }

    /// Replace matches of the regular expression `pattern`.
    pub fn pattern(
        hotkey: Hotkey,
        pattern: &str,
        expand: impl Into<String>,
    ) -> Result<Self, BindingError> {
        Ok(Self {
            hotkey,
            pattern: Regex::new(pattern)?,
            expand: expand.into(),
        })
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn macro_pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn expansion(&self) -> &str {
        &self.expand
    }

    /// Expand every match in the editor's content.
    ///
    /// Matches that end at or before the cursor shift it by their change in
    /// length, so the caret stays after the text the user just typed.
    pub fn apply<S: TextSurface>(&self, editor: &Editor<S>) {
        let content = editor.content();
        if !self.pattern.is_match(&content) {
            return;
        }

        let cursor = editor.cursor();
        let range = cursor.selection_range();
        let expand_len = char_len(&self.expand) as isize;
        let mut start_shift = 0isize;
        let mut end_shift = 0isize;
        let mut replaced = 0usize;
        for found in self.pattern.find_iter(&content) {
            replaced += 1;
            let match_end = char_len(&content[..found.end()]);
            let delta = expand_len - char_len(found.as_str()) as isize;
            if match_end <= range.start {
                start_shift += delta;
            }
            if match_end <= range.end {
                end_shift += delta;
            }
        }

        let expanded = self
            .pattern
            .replace_all(&content, NoExpand(&self.expand))
            .into_owned();
        tracing::debug!(pattern = self.pattern.as_str(), replaced, "macro expanded");
        editor.set_content(&expanded);
        cursor.move_to(
            range.start.saturating_add_signed(start_shift),
            range.end.saturating_add_signed(end_shift),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MemorySurface;

    fn asap() -> MacroBinding {
        MacroBinding::literal(Hotkey::parse("space").unwrap(), "asap", "as soon as possible")
            .unwrap()
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let editor = Editor::new(MemorySurface::with_value("asap asap"));
        asap().apply(&editor);
        assert_eq!(editor.content(), "as soon as possible as soon as possible");
        assert_eq!(editor.cursor().position(), char_len(&editor.content()));
    }

    #[test]
    fn test_cursor_follows_expansion() {
        // Typed "lol " in the middle; text after the cursor is untouched.
        let editor = Editor::new(MemorySurface::with_selection("ha lol tail", 7, 7));
        let lol = MacroBinding::literal(Hotkey::parse("space").unwrap(), "lol", "laugh out loud")
            .unwrap();
        lol.apply(&editor);
        assert_eq!(editor.content(), "ha laugh out loud tail");
        assert_eq!(editor.cursor().position(), 18);
    }

    #[test]
    fn test_matches_after_cursor_do_not_move_it() {
        let editor = Editor::new(MemorySurface::with_selection("x asap", 1, 1));
        asap().apply(&editor);
        assert_eq!(editor.content(), "x as soon as possible");
        assert_eq!(editor.cursor().position(), 1);
    }

    #[test]
    fn test_no_match_is_untouched() {
        let editor = Editor::new(MemorySurface::with_selection("nothing here", 3, 5));
        asap().apply(&editor);
        assert_eq!(editor.content(), "nothing here");
        assert_eq!(editor.cursor().selection_range().end, 5);
    }

    #[test]
    fn test_literal_is_escaped() {
        let editor = Editor::new(MemorySurface::with_value("a.b axb"));
        let dot = MacroBinding::literal(Hotkey::parse("space").unwrap(), "a.b", "$1").unwrap();
        dot.apply(&editor);
        assert_eq!(editor.content(), "$1 axb");
    }

    #[test]
    fn test_pattern_macro() {
        let editor = Editor::new(MemorySurface::with_value("brb, BRB"));
        let brb =
            MacroBinding::pattern(Hotkey::parse("space").unwrap(), "(?i)brb", "be right back")
                .unwrap();
        brb.apply(&editor);
        assert_eq!(editor.content(), "be right back, be right back");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = MacroBinding::pattern(Hotkey::parse("space").unwrap(), "(unclosed", "x");
        assert!(matches!(err, Err(BindingError::InvalidMacro(_))));
    }
}

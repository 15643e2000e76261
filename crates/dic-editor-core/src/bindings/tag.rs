//! Tag insertion and wrapping.

use smol_str::SmolStr;

use crate::cursor::SelectionRange;
use crate::editor::Editor;
use crate::keys::Hotkey;
use crate::text::{TextSurface, char_len, insert_at};

/// An opening and closing tag. Either side may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagPair {
    pub start: Option<SmolStr>,
    pub end: Option<SmolStr>,
}

impl TagPair {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(SmolStr::new),
            end: end.map(SmolStr::new),
        }
    }

    /// A `[name]` / `[/name]` pair.
    pub fn named(name: &str) -> Self {
        Self {
            start: Some(SmolStr::new(format!("[{name}]"))),
            end: Some(SmolStr::new(format!("[/{name}]"))),
        }
    }

    pub fn start_len(&self) -> usize {
        self.start.as_deref().map(char_len).unwrap_or(0)
    }

    pub fn end_len(&self) -> usize {
        self.end.as_deref().map(char_len).unwrap_or(0)
    }

    /// Char offset inside the start tag of its empty attribute value, i.e.
    /// between the quotes of `[url='']`. Falls back to the end of the tag
    /// when it has no empty quoted value.
    pub fn caret_anchor(&self) -> usize {
        let Some(start) = self.start.as_deref() else {
            return 0;
        };
        match start.find("''") {
            Some(byte) => char_len(&start[..byte]) + 1,
            None => char_len(start),
        }
    }

    /// The part of the start tag after the caret anchor (`']` for `[url='']`).
    pub fn attribute_closer(&self) -> &str {
        let Some(start) = self.start.as_deref() else {
            return "";
        };
        let byte = start
            .char_indices()
            .nth(self.caret_anchor())
            .map(|(byte, _)| byte)
            .unwrap_or(start.len());
        &start[byte..]
    }

    pub fn attribute_closer_len(&self) -> usize {
        self.start_len() - self.caret_anchor()
    }
}

/// A TagBinding inserts an opening and closing tag at the cursor. If text
/// is selected, the selection is wrapped in the tags instead.
#[derive(Debug, Clone)]
pub struct TagBinding {
    hotkey: Hotkey,
    tags: TagPair,
}

impl TagBinding {
    pub fn new(hotkey: Hotkey, tags: TagPair) -> Self {
        Self { hotkey, tags }
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn tags(&self) -> &TagPair {
        &self.tags
    }

    /// Insert or wrap on `editor`.
    pub fn apply<S: TextSurface>(&self, editor: &Editor<S>) {
        apply_tags(&self.tags, editor);
    }
}

/// Shared tag behavior, also driven by the member and url bindings.
pub(crate) fn apply_tags<S: TextSurface>(tags: &TagPair, editor: &Editor<S>) {
    let cursor = editor.cursor();
    if cursor.has_selection() {
        wrap_with_tags(tags, editor, cursor.selection_range());
    } else {
        insert_tags(tags, editor, cursor.position());
    }
}

fn insert_tags<S: TextSurface>(tags: &TagPair, editor: &Editor<S>, mut position: usize) {
    let mut content = editor.content();
    if let Some(start) = &tags.start {
        content = insert_at(&content, position, start);
        position += char_len(start);
    }
    if let Some(end) = &tags.end {
        content = insert_at(&content, position, end);
    }
    editor.set_content(&content);
    editor.cursor().collapse(position);
}

fn wrap_with_tags<S: TextSurface>(tags: &TagPair, editor: &Editor<S>, range: SelectionRange) {
    let mut content = editor.content();
    let mut end = range.end;
    if let Some(start) = &tags.start {
        content = insert_at(&content, range.start, start);
        end += char_len(start);
    }
    if let Some(close) = &tags.end {
        content = insert_at(&content, end, close);
    }
    editor.set_content(&content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MemorySurface;

    fn bold() -> TagBinding {
        TagBinding::new(Hotkey::parse("ctrl+b").unwrap(), TagPair::named("b"))
    }

    #[test]
    fn test_insert_at_caret() {
        let editor = Editor::new(MemorySurface::with_selection("hello world", 6, 6));
        bold().apply(&editor);
        assert_eq!(editor.content(), "hello [b][/b]world");
        assert_eq!(editor.cursor().position(), 9);
        assert!(!editor.cursor().has_selection());
    }

    #[test]
    fn test_wrap_selection() {
        let editor = Editor::new(MemorySurface::with_selection("hello world", 6, 11));
        bold().apply(&editor);
        assert_eq!(editor.content(), "hello [b]world[/b]");
    }

    #[test]
    fn test_single_sided_tags() {
        let open_only = TagBinding::new(
            Hotkey::parse("ctrl+1").unwrap(),
            TagPair::new(Some("[*]"), None),
        );
        let editor = Editor::new(MemorySurface::with_selection("ab", 1, 2));
        open_only.apply(&editor);
        assert_eq!(editor.content(), "a[*]b");

        let close_only = TagBinding::new(
            Hotkey::parse("ctrl+2").unwrap(),
            TagPair::new(None, Some("[/*]")),
        );
        let editor = Editor::new(MemorySurface::with_selection("ab", 0, 1));
        close_only.apply(&editor);
        assert_eq!(editor.content(), "a[/*]b");

        let editor = Editor::new(MemorySurface::with_selection("ab", 1, 1));
        close_only.apply(&editor);
        assert_eq!(editor.content(), "a[/*]b");
        assert_eq!(editor.cursor().position(), 1);
    }

    #[test]
    fn test_degenerate_pair_is_noop() {
        let none = TagBinding::new(Hotkey::parse("ctrl+3").unwrap(), TagPair::default());
        let editor = Editor::new(MemorySurface::with_selection("abc", 2, 2));
        none.apply(&editor);
        assert_eq!(editor.content(), "abc");
        assert_eq!(editor.cursor().position(), 2);
    }

    #[test]
    fn test_caret_anchor() {
        let member = TagPair::new(Some("[member='']"), None);
        assert_eq!(member.caret_anchor(), 9);
        assert_eq!(member.attribute_closer_len(), 2);
        assert_eq!(member.attribute_closer(), "']");

        let url = TagPair::new(Some("[url='']"), Some("[/url]"));
        assert_eq!(url.caret_anchor(), 6);
        assert_eq!(url.end_len(), 6);

        let plain = TagPair::named("quote");
        assert_eq!(plain.caret_anchor(), 7);
        assert_eq!(plain.attribute_closer_len(), 0);
        assert_eq!(plain.attribute_closer(), "");
    }
}

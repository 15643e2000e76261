//! Property-based tests for the text-editing laws of the bindings.

use std::rc::Rc;

use dic_editor_core::{
    Editor, EditorRegistry, Hotkey, MacroBinding, MemberTagBinding, MemorySurface,
    NoMemberPicker, TabBinding, TagBinding, TagPair, TextSurface,
};
use proptest::prelude::*;
use proptest::sample::Index;

// ============================================================================
// Helpers
// ============================================================================

fn chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// How far past the end of the text generated offsets may reach.
const OVERSHOOT: usize = 8;

/// Text plus an ordered pair of char offsets, some of them past its end.
fn text_with_range(pattern: &'static str) -> impl Strategy<Value = (String, usize, usize)> {
    (pattern, any::<Index>(), any::<Index>()).prop_map(|(text, a, b)| {
        let span = char_count(&text) + 1 + OVERSHOOT;
        let (a, b) = (a.index(span), b.index(span));
        (text, a.min(b), a.max(b))
    })
}

/// The offset a textarea would keep for `offset` in `text`.
fn clamped(text: &str, offset: usize) -> usize {
    offset.min(char_count(text))
}

fn bold() -> TagBinding {
    TagBinding::new(Hotkey::parse("ctrl+b").unwrap(), TagPair::named("b"))
}

// ============================================================================
// Tag insertion and wrapping
// ============================================================================

proptest! {
    #[test]
    fn caret_insertion_places_cursor_between_tags((text, p, _) in text_with_range("\\PC{0,40}")) {
        let editor = Editor::new(MemorySurface::with_selection(&text, p, p));
        let p = clamped(&text, p);
        bold().apply(&editor);

        let len = char_count(&text);
        let expected = format!("{}[b][/b]{}", chars(&text, 0, p), chars(&text, p, len));
        prop_assert_eq!(editor.content(), expected);
        prop_assert_eq!(editor.cursor().position(), p + 3);
        prop_assert!(!editor.cursor().has_selection());
    }

    #[test]
    fn selection_is_wrapped_in_tags((text, s, e) in text_with_range("\\PC{1,40}")) {
        let editor = Editor::new(MemorySurface::with_selection(&text, s, e));
        let (s, e) = (clamped(&text, s), clamped(&text, e));
        prop_assume!(s < e);
        bold().apply(&editor);

        let len = char_count(&text);
        let expected = format!(
            "{}[b]{}[/b]{}",
            chars(&text, 0, s),
            chars(&text, s, e),
            chars(&text, e, len)
        );
        prop_assert_eq!(editor.content(), expected);
        let range = editor.cursor().selection_range();
        prop_assert_eq!((range.start, range.end), (s, e));
    }

    #[test]
    fn start_only_tag_inserts_one_side((text, p, _) in text_with_range("[\\x20-\\x7E]{0,40}")) {
        let hr = TagBinding::new(Hotkey::parse("ctrl+h").unwrap(), TagPair::new(Some("[hr]"), None));
        let editor = Editor::new(MemorySurface::with_selection(&text, p, p));
        let p = clamped(&text, p);
        hr.apply(&editor);

        let len = char_count(&text);
        prop_assert_eq!(editor.content(), format!("{}[hr]{}", chars(&text, 0, p), chars(&text, p, len)));
        prop_assert_eq!(editor.cursor().position(), p + 4);
    }

    #[test]
    fn end_only_tag_wraps_one_side((text, s, e) in text_with_range("[\\x20-\\x7E]{1,40}")) {
        let close = TagBinding::new(Hotkey::parse("ctrl+e").unwrap(), TagPair::new(None, Some("[/x]")));
        let editor = Editor::new(MemorySurface::with_selection(&text, s, e));
        let (s, e) = (clamped(&text, s), clamped(&text, e));
        prop_assume!(s < e);
        close.apply(&editor);

        let len = char_count(&text);
        prop_assert_eq!(editor.content(), format!("{}[/x]{}", chars(&text, 0, e), chars(&text, e, len)));
    }

    #[test]
    fn member_tag_leaves_cursor_in_quotes((text, p, _) in text_with_range("[\\x20-\\x7E]{0,40}")) {
        let member = MemberTagBinding::new(Hotkey::parse("ctrl+m").unwrap(), Rc::new(NoMemberPicker));
        let editor = Editor::new(MemorySurface::with_selection(&text, p, p));
        let p = clamped(&text, p);
        member.apply(&editor);

        let len = char_count(&text);
        prop_assert_eq!(
            editor.content(),
            format!("{}[member='']{}", chars(&text, 0, p), chars(&text, p, len))
        );
        prop_assert_eq!(editor.cursor().position(), p + 9);
    }
}

// ============================================================================
// Macros and indentation
// ============================================================================

fn asap_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["asap", "as", "ap", " ", "x", "\n"]), 0..20)
        .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn macro_replaces_every_occurrence(text in asap_text()) {
        let asap = MacroBinding::literal(Hotkey::parse("space").unwrap(), "asap", "as soon as possible")
            .unwrap();
        let editor = Editor::new(MemorySurface::with_value(&text));
        asap.apply(&editor);

        let expected = text.replace("asap", "as soon as possible");
        prop_assert_eq!(editor.content(), expected.clone());
        // Cursor started at the end, so it stays at the end.
        prop_assert_eq!(editor.cursor().position(), char_count(&expected));
    }

    #[test]
    fn tab_indents_each_selected_line((text, s, e) in text_with_range("[a-z\t\n]{1,40}")) {
        let editor = Editor::new(MemorySurface::with_selection(&text, s, e));
        let (s, e) = (clamped(&text, s), clamped(&text, e));
        prop_assume!(s < e);
        TabBinding::new().apply(&editor);

        let len = char_count(&text);
        let indented = format!("\t{}", chars(&text, s, e).replace('\n', "\n\t"));
        let expected = format!("{}{}{}", chars(&text, 0, s), indented, chars(&text, e, len));
        prop_assert_eq!(editor.content(), expected);
        prop_assert_eq!(editor.cursor().position(), s + 1);
    }

    #[test]
    fn tab_at_caret_inserts_one_tab((text, p, _) in text_with_range("[\\x20-\\x7E\n]{0,40}")) {
        let editor = Editor::new(MemorySurface::with_selection(&text, p, p));
        let p = clamped(&text, p);
        TabBinding::new().apply(&editor);

        let len = char_count(&text);
        prop_assert_eq!(editor.content(), format!("{}\t{}", chars(&text, 0, p), chars(&text, p, len)));
        prop_assert_eq!(editor.cursor().position(), p + 1);
    }
}

// ============================================================================
// Registry
// ============================================================================

proptest! {
    #[test]
    fn rediscovery_never_duplicates(picks in prop::collection::vec(0usize..5, 0..30)) {
        let surfaces: Vec<MemorySurface> = (0..5).map(|i| MemorySurface::with_value(&i.to_string())).collect();
        let mut registry = EditorRegistry::new();

        let mut distinct = Vec::new();
        for chunk in picks.chunks(3) {
            registry.discover(chunk.iter().map(|&i| surfaces[i].clone()));
            for &i in chunk {
                if !distinct.contains(&i) {
                    distinct.push(i);
                }
            }
            prop_assert_eq!(registry.len(), distinct.len());
        }

        if let Some(&first) = distinct.first() {
            prop_assert!(registry.active().unwrap().surface().same_surface(&surfaces[first]));
        } else {
            prop_assert!(registry.active().is_none());
        }
    }
}

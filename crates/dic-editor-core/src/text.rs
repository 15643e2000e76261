//! Text surface abstraction for editor storage.
//!
//! The `TextSurface` trait is the narrow contract the bindings need from a
//! host input: read and write the whole value, read and write the selection.
//! The browser crate implements it over `<textarea>` elements, and
//! `MemorySurface` implements it in memory for tests and native callers.

use std::cell::RefCell;
use std::rc::Rc;

use smol_str::SmolStr;

/// A plain-text input surface with a selection.
///
/// All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
///
/// Handles are cheap to clone and every clone refers to the same underlying
/// buffer, the way two references to one DOM element do. That lets a binding
/// capture an editor for an asynchronous completion without borrowing it.
pub trait TextSurface: Clone + 'static {
    /// Get the full text content.
    fn value(&self) -> String;

    /// Replace the full text content.
    ///
    /// The selection is clamped to the new length but otherwise preserved.
    fn set_value(&self, value: &str);

    /// Char offset where the selection starts.
    fn selection_start(&self) -> usize;

    /// Char offset where the selection ends.
    fn selection_end(&self) -> usize;

    /// Set both selection offsets.
    ///
    /// Hosts keep `start <= end <= len`: offsets past the end are clamped,
    /// and an `end` before `start` pulls `start` down to it, as a textarea's
    /// `setSelectionRange` does.
    fn set_selection_range(&self, start: usize, end: usize);

    /// Whether `other` refers to the same underlying buffer.
    fn same_surface(&self, other: &Self) -> bool;

    /// Give the surface input focus, if the host has such a notion.
    fn focus(&self) {}
}

/// Number of chars in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset into a byte offset, clamping to the end of `text`.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Return `text` with `value` inserted at `char_offset`.
///
/// Offsets past the end append.
pub fn insert_at(text: &str, char_offset: usize, value: &str) -> String {
    let byte = char_to_byte(text, char_offset);
    let mut out = String::with_capacity(text.len() + value.len());
    out.push_str(&text[..byte]);
    out.push_str(value);
    out.push_str(&text[byte..]);
    out
}

/// Slice `text` by char range, clamping both ends.
pub fn slice_chars(text: &str, start: usize, end: usize) -> SmolStr {
    let start = char_to_byte(text, start);
    let end = char_to_byte(text, end).max(start);
    SmolStr::new(&text[start..end])
}

/// Return `text` with the char range `start..end` replaced by `value`.
pub fn replace_chars(text: &str, start: usize, end: usize, value: &str) -> String {
    let start = char_to_byte(text, start);
    let end = char_to_byte(text, end).max(start);
    let mut out = String::with_capacity(text.len() - (end - start) + value.len());
    out.push_str(&text[..start]);
    out.push_str(value);
    out.push_str(&text[end..]);
    out
}

#[derive(Debug, Default)]
struct MemoryState {
    value: String,
    selection_start: usize,
    selection_end: usize,
}

/// In-memory text surface.
///
/// Clones share state; identity is the shared allocation.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySurface {
    /// Create an empty surface with a collapsed selection at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface holding `value` with the cursor at the end.
    pub fn with_value(value: &str) -> Self {
        let end = char_len(value);
        Self::with_selection(value, end, end)
    }

    /// Create a surface holding `value` with the given selection, clamped
    /// like `set_selection_range`.
    pub fn with_selection(value: &str, start: usize, end: usize) -> Self {
        let (selection_start, selection_end) = clamp_selection(char_len(value), start, end);
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                value: value.to_string(),
                selection_start,
                selection_end,
            })),
        }
    }
}

impl TextSurface for MemorySurface {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        let mut state = self.state.borrow_mut();
        let len = char_len(value);
        state.value = value.to_string();
        state.selection_start = state.selection_start.min(len);
        state.selection_end = state.selection_end.min(len);
    }

    fn selection_start(&self) -> usize {
        self.state.borrow().selection_start
    }

    fn selection_end(&self) -> usize {
        self.state.borrow().selection_end
    }

    fn set_selection_range(&self, start: usize, end: usize) {
        let mut state = self.state.borrow_mut();
        let (start, end) = clamp_selection(char_len(&state.value), start, end);
        state.selection_start = start;
        state.selection_end = end;
    }

    fn same_surface(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

/// Clamp a selection into `0..=len` with `start <= end`.
fn clamp_selection(len: usize, start: usize, end: usize) -> (usize, usize) {
    let end = end.min(len);
    (start.min(end), end)
}

impl From<&str> for MemorySurface {
    fn from(s: &str) -> Self {
        Self::with_value(s)
    }
}

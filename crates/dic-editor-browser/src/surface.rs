//! `TextSurface` over a `<textarea>` element.
//!
//! The DOM measures selection offsets in UTF-16 code units while the core
//! crate works in chars, so every offset is converted at this boundary.

use dic_editor_core::TextSurface;
use dic_editor_core::text::char_len;
use web_sys::HtmlTextAreaElement;

/// A textarea handle. Clones refer to the same element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAreaSurface {
    element: HtmlTextAreaElement,
}

impl TextAreaSurface {
    pub fn new(element: HtmlTextAreaElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.element
    }

    fn char_offset(&self, utf16: Result<Option<u32>, wasm_bindgen::JsValue>) -> usize {
        match utf16 {
            Ok(Some(offset)) => utf16_to_char(&self.element.value(), offset),
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!("textarea selection unavailable: {:?}", e);
                0
            }
        }
    }
}

impl From<HtmlTextAreaElement> for TextAreaSurface {
    fn from(element: HtmlTextAreaElement) -> Self {
        Self::new(element)
    }
}

impl TextSurface for TextAreaSurface {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&self, value: &str) {
        // Assigning the value moves the browser caret to the end.
        let start = self.selection_start();
        let end = self.selection_end();
        self.element.set_value(value);
        let len = char_len(value);
        self.set_selection_range(start.min(len), end.min(len));
    }

    fn selection_start(&self) -> usize {
        self.char_offset(self.element.selection_start())
    }

    fn selection_end(&self) -> usize {
        self.char_offset(self.element.selection_end())
    }

    fn set_selection_range(&self, start: usize, end: usize) {
        let value = self.element.value();
        let start = char_to_utf16(&value, start);
        let end = char_to_utf16(&value, end);
        if let Err(e) = self.element.set_selection_range(start, end) {
            tracing::warn!("failed to set textarea selection: {:?}", e);
        }
    }

    fn same_surface(&self, other: &Self) -> bool {
        self.element == other.element
    }

    fn focus(&self) {
        if let Err(e) = self.element.focus() {
            tracing::debug!("textarea focus failed: {:?}", e);
        }
    }
}

/// Convert a UTF-16 offset into `text` to a char offset.
///
/// An offset inside a surrogate pair rounds up to the following char.
pub fn utf16_to_char(text: &str, utf16: u32) -> usize {
    let mut units = 0u32;
    for (index, c) in text.chars().enumerate() {
        if units >= utf16 {
            return index;
        }
        units += c.len_utf16() as u32;
    }
    char_len(text)
}

/// Convert a char offset into `text` to a UTF-16 offset, clamping to the end.
pub fn char_to_utf16(text: &str, chars: usize) -> u32 {
    text.chars().take(chars).map(|c| c.len_utf16() as u32).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identical() {
        assert_eq!(utf16_to_char("hello", 3), 3);
        assert_eq!(char_to_utf16("hello", 3), 3);
    }

    #[test]
    fn test_astral_chars_take_two_units() {
        let text = "a😀b";
        assert_eq!(char_to_utf16(text, 2), 3);
        assert_eq!(utf16_to_char(text, 3), 2);
        assert_eq!(utf16_to_char(text, 2), 2);
    }

    #[test]
    fn test_offsets_clamp_to_end() {
        assert_eq!(utf16_to_char("ab", 10), 2);
        assert_eq!(char_to_utf16("ab", 10), 2);
    }
}

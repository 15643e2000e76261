//! Cursor view over a text surface.

use crate::text::TextSurface;

/// An ordered selection range in char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length of the range, zero if the ends are reversed.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Cursor represents an editor's native caret and selection.
///
/// It owns no state: every query reads the surface's selection fields and
/// `move_to` writes them.
#[derive(Clone, Debug)]
pub struct Cursor<S> {
    surface: S,
}

impl<S: TextSurface> Cursor<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Whether some text is selected.
    pub fn has_selection(&self) -> bool {
        self.surface.selection_start() != self.surface.selection_end()
    }

    pub fn selection_range(&self) -> SelectionRange {
        SelectionRange::new(self.surface.selection_start(), self.surface.selection_end())
    }

    /// The collapsed caret offset. With a selection this is its start.
    pub fn position(&self) -> usize {
        self.surface.selection_start()
    }

    /// Set both selection ends. Bounds are the surface's business.
    pub fn move_to(&self, start: usize, end: usize) {
        tracing::trace!(start, end, "cursor move");
        self.surface.set_selection_range(start, end);
    }

    /// Collapse the selection to `offset`.
    pub fn collapse(&self, offset: usize) {
        self.move_to(offset, offset);
    }
}

//! Editor: one text surface paired with its cursor.

use crate::cursor::Cursor;
use crate::text::TextSurface;

/// An Editor pairs a text surface with a cursor over it.
///
/// Identity is the surface: two editors are the same editor when their
/// surfaces are. Clones are handles onto the same buffer.
#[derive(Clone, Debug)]
pub struct Editor<S> {
    surface: S,
    cursor: Cursor<S>,
}

impl<S: TextSurface> Editor<S> {
    pub fn new(surface: S) -> Self {
        let cursor = Cursor::new(surface.clone());
        Self { surface, cursor }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn cursor(&self) -> &Cursor<S> {
        &self.cursor
    }

    /// Whether this editor wraps `surface`.
    pub fn is_for(&self, surface: &S) -> bool {
        self.surface.same_surface(surface)
    }

    /// Whether both editors wrap the same surface.
    pub fn same_editor(&self, other: &Self) -> bool {
        self.surface.same_surface(&other.surface)
    }

    /// Get the full content.
    pub fn content(&self) -> String {
        self.surface.value()
    }

    /// Replace the full content. The cursor is left to the caller.
    pub fn set_content(&self, value: &str) {
        self.surface.set_value(value);
    }
}

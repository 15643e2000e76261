//! Registry of the editors on a page and the active-editor slot.
//!
//! The forum can add editors at any time (editing a post opens a new one),
//! so the registry only grows. Exactly one editor is active once any exists;
//! key events are always applied to the active editor.

use crate::editor::Editor;
use crate::text::TextSurface;

/// Append-only list of editors plus the active-editor slot.
#[derive(Debug)]
pub struct EditorRegistry<S> {
    editors: Vec<Editor<S>>,
    active: Option<usize>,
}

impl<S> Default for EditorRegistry<S> {
    fn default() -> Self {
        Self {
            editors: Vec::new(),
            active: None,
        }
    }
}

impl<S: TextSurface> EditorRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Editor<S>> {
        self.editors.iter()
    }

    /// The editor wrapping `surface`, if known.
    pub fn find_by_surface(&self, surface: &S) -> Option<&Editor<S>> {
        self.editors.iter().find(|e| e.is_for(surface))
    }

    fn index_of(&self, surface: &S) -> Option<usize> {
        self.editors.iter().position(|e| e.is_for(surface))
    }

    /// The editor key events currently apply to.
    pub fn active(&self) -> Option<&Editor<S>> {
        self.active.and_then(|i| self.editors.get(i))
    }

    /// Register every surface not seen before.
    ///
    /// Returns the newly created editors in discovery order so the caller
    /// can install listeners on exactly those. The first editor ever
    /// created becomes active; later discoveries leave the slot alone.
    pub fn discover<I>(&mut self, surfaces: I) -> Vec<Editor<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut added = Vec::new();
        for surface in surfaces {
            if self.find_by_surface(&surface).is_some() {
                continue;
            }
            let editor = Editor::new(surface);
            self.editors.push(editor.clone());
            added.push(editor);
        }

        if self.active.is_none() && !self.editors.is_empty() {
            self.active = Some(0);
        }
        if !added.is_empty() {
            tracing::debug!(added = added.len(), total = self.editors.len(), "editors discovered");
        }
        added
    }

    /// Make the editor wrapping `surface` active.
    ///
    /// Returns `false` (and leaves the slot alone) for unknown surfaces.
    pub fn activate(&mut self, surface: &S) -> bool {
        match self.index_of(surface) {
            Some(index) => {
                if self.active != Some(index) {
                    tracing::debug!(index, "active editor changed");
                }
                self.active = Some(index);
                true
            }
            None => {
                tracing::warn!("activation for an unregistered editor ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MemorySurface;

    #[test]
    fn test_first_editor_becomes_active() {
        let mut registry = EditorRegistry::new();
        assert!(registry.active().is_none());

        let a = MemorySurface::with_value("a");
        let b = MemorySurface::with_value("b");
        let added = registry.discover([a.clone(), b.clone()]);
        assert_eq!(added.len(), 2);
        assert!(registry.active().unwrap().is_for(&a));
    }

    #[test]
    fn test_rediscovery_never_duplicates() {
        let mut registry = EditorRegistry::new();
        let a = MemorySurface::with_value("a");
        registry.discover([a.clone()]);
        let added = registry.discover([a.clone(), a.clone()]);
        assert!(added.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_discovery_keeps_active_editor() {
        let mut registry = EditorRegistry::new();
        let a = MemorySurface::with_value("a");
        let b = MemorySurface::with_value("b");
        registry.discover([a.clone()]);
        let added = registry.discover([a.clone(), b.clone()]);
        assert_eq!(added.len(), 1);
        assert!(added[0].is_for(&b));
        assert!(registry.active().unwrap().is_for(&a));
    }

    #[test]
    fn test_activate() {
        let mut registry = EditorRegistry::new();
        let a = MemorySurface::with_value("a");
        let b = MemorySurface::with_value("b");
        registry.discover([a.clone(), b.clone()]);

        assert!(registry.activate(&b));
        assert!(registry.active().unwrap().is_for(&b));

        assert!(!registry.activate(&MemorySurface::with_value("stranger")));
        assert!(registry.active().unwrap().is_for(&b));
        assert!(registry.find_by_surface(&a).is_some());
    }
}

//! The url tag: `[url='…']text[/url]` filled from the URL source.

use std::rc::Rc;

use super::tag::{TagPair, apply_tags};
use crate::editor::Editor;
use crate::keys::Hotkey;
use crate::platform::UrlSource;
use crate::text::{TextSurface, char_len, insert_at};

pub const URL_START_TAG: &str = "[url='']";
pub const URL_END_TAG: &str = "[/url]";

/// Inserts url tags at the cursor or around the selection, then fills the
/// url attribute with whatever the URL source returns (the clipboard, in
/// the browser extension).
#[derive(Clone)]
pub struct UrlTagBinding {
    hotkey: Hotkey,
    tags: TagPair,
    source: Rc<dyn UrlSource>,
}

impl UrlTagBinding {
    pub fn new(hotkey: Hotkey, source: Rc<dyn UrlSource>) -> Self {
        Self {
            hotkey,
            tags: TagPair::new(Some(URL_START_TAG), Some(URL_END_TAG)),
            source,
        }
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn tags(&self) -> &TagPair {
        &self.tags
    }

    pub fn apply<S: TextSurface>(&self, editor: &Editor<S>) {
        let range = editor.cursor().selection_range();
        let selected_len = range.len();
        apply_tags(&self.tags, editor);

        let landing = range.start + self.tags.caret_anchor();
        editor.cursor().collapse(landing);

        // Text between the attribute value and the end tag.
        let closer_len = self.tags.attribute_closer_len();
        let target = editor.clone();
        self.source.request_url(Box::new(move |value| {
            let Some(value) = value.filter(|v| !v.is_empty()) else {
                tracing::debug!("url source returned nothing");
                return;
            };
            let content = insert_at(&target.content(), landing, &value);
            target.set_content(&content);
            let before_end_tag = landing + char_len(&value) + closer_len + selected_len;
            tracing::debug!(landing, before_end_tag, "url inserted");
            target.cursor().collapse(before_end_tag);
        }));
    }
}

impl std::fmt::Debug for UrlTagBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlTagBinding")
            .field("hotkey", &self.hotkey)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

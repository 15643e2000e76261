//! Content-script configuration.
//!
//! Holds the host page constants (selectors, endpoints, the friend-list
//! user id). Nothing here is persisted; the browser crate may accept an
//! override object at start-up. The binding table is not configurable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Selector for the editor textareas.
    pub editor_selector: String,
    /// Selector for the containers observed for newly added editors.
    pub post_container_selector: String,
    /// Class of an element whose insertion means a new editor appeared.
    pub new_editor_class: String,
    /// Selector for author links on the page; their text is a member name.
    pub page_user_selector: String,
    /// Endpoint answering `?showuser=<id>` with the user's profile XML.
    pub friends_endpoint: String,
    /// Whose friends the member picker suggests.
    pub friends_user_id: u64,
    /// `text` field of the message asking the extension for a URL.
    pub url_message_tag: String,
    /// Title of the member picker dialog.
    pub dialog_title: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            editor_selector: "div .editor textarea".to_owned(),
            post_container_selector: ".post.entry-content".to_owned(),
            new_editor_class: "ips_editor".to_owned(),
            page_user_selector: "a.url.fn".to_owned(),
            friends_endpoint: "http://www.dreamincode.net/forums/xml.php".to_owned(),
            friends_user_id: 4803,
            url_message_tag: "urlBinding".to_owned(),
            dialog_title: "Choose DIC Member".to_owned(),
        }
    }
}

impl ContentConfig {
    /// Check that no selector or endpoint was overridden with an empty value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("editorSelector", &self.editor_selector),
            ("postContainerSelector", &self.post_container_selector),
            ("newEditorClass", &self.new_editor_class),
            ("pageUserSelector", &self.page_user_selector),
            ("friendsEndpoint", &self.friends_endpoint),
            ("urlMessageTag", &self.url_message_tag),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyField(*name)),
            None => Ok(()),
        }
    }

    /// URL of the friends lookup for the configured user.
    pub fn friends_url(&self) -> String {
        format!("{}?showuser={}", self.friends_endpoint, self.friends_user_id)
    }
}

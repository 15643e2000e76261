//! The member picker dialog.
//!
//! A `<dialog>` with a name input (suggesting the user's friends through a
//! `<datalist>`), a Choose button and one button per member who posted on
//! the page. Built on first use and reused afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use dic_editor_core::{
    ContentConfig, MemberCandidates, MemberPicker, PickCallback, PlatformError, SmolStr,
};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDataListElement, HtmlDialogElement,
    HtmlInputElement, HtmlOptionElement,
};

use crate::js_error;

const DIALOG_ID: &str = "dic-member-dialog";
const SUGGESTIONS_ID: &str = "dic-member-suggestions";

/// The dialog's elements plus the completion waiting for a pick.
pub struct MemberDialog {
    dialog: HtmlDialogElement,
    input: HtmlInputElement,
    suggestions: HtmlDataListElement,
    pending: Rc<RefCell<Option<PickCallback>>>,
}

impl MemberDialog {
    /// Build the dialog and append it to the document body.
    ///
    /// `on_close` runs every time the dialog closes, picked or not.
    pub fn build(
        document: &Document,
        title: &str,
        page_users: &[SmolStr],
        on_close: Rc<dyn Fn()>,
    ) -> Result<Rc<Self>, PlatformError> {
        let dialog: HtmlDialogElement = create(document, "dialog")?;
        dialog.set_id(DIALOG_ID);

        let heading = document.create_element("h3").map_err(js_error)?;
        heading.set_text_content(Some(title));
        append(&dialog, &heading)?;

        let label = document.create_element("label").map_err(js_error)?;
        label.set_text_content(Some("Name: "));
        append(&dialog, &label)?;

        let input: HtmlInputElement = create(document, "input")?;
        input.set_type("text");
        input.set_size(40);
        input
            .set_attribute("list", SUGGESTIONS_ID)
            .map_err(js_error)?;
        append(&label, &input)?;

        let suggestions: HtmlDataListElement = create(document, "datalist")?;
        suggestions.set_id(SUGGESTIONS_ID);
        append(&dialog, &suggestions)?;

        let choose: HtmlButtonElement = create(document, "button")?;
        choose.set_type("button");
        choose.set_text_content(Some("Choose"));
        append(&dialog, &choose)?;

        let users = document.create_element("div").map_err(js_error)?;
        append(&dialog, &users)?;

        let body = document
            .body()
            .ok_or_else(|| PlatformError::from("document has no body"))?;
        append(&body, &dialog)?;

        let this = Rc::new(Self {
            dialog,
            input,
            suggestions,
            pending: Rc::new(RefCell::new(None)),
        });

        for name in page_users {
            let button: HtmlButtonElement = create(document, "button")?;
            button.set_type("button");
            button.set_text_content(Some(name));
            append(&users, &button)?;

            let dialog = this.clone();
            let name = name.clone();
            EventListener::new(&button, "click", move |_| dialog.complete(name.clone())).forget();
        }

        let dialog = this.clone();
        EventListener::new(&choose, "click", move |_| {
            let name = dialog.input.value();
            if !name.is_empty() {
                dialog.complete(SmolStr::new(name));
            } else {
                dialog.dialog.close();
            }
        })
        .forget();

        let dialog = this.clone();
        EventListener::new(&this.dialog, "close", move |_| {
            dialog.input.set_value("");
            // Dismissed without a pick.
            dialog.pending.borrow_mut().take();
            on_close();
        })
        .forget();

        tracing::debug!(page_users = page_users.len(), "member dialog built");
        Ok(this)
    }

    /// Replace the autocomplete suggestions.
    pub fn set_suggestions(&self, names: &[SmolStr]) -> Result<(), PlatformError> {
        self.suggestions.set_inner_html("");
        let document = self
            .dialog
            .owner_document()
            .ok_or_else(|| PlatformError::from("dialog is detached"))?;
        for name in names {
            let option: HtmlOptionElement = create(&document, "option")?;
            option.set_value(name);
            append(&self.suggestions, &option)?;
        }
        Ok(())
    }

    /// Show the dialog; `on_pick` receives the chosen name.
    pub fn open(&self, on_pick: PickCallback) -> Result<(), PlatformError> {
        *self.pending.borrow_mut() = Some(on_pick);
        if self.dialog.open() {
            return Ok(());
        }
        self.dialog.show_modal().map_err(js_error)
    }

    pub fn is_open(&self) -> bool {
        self.dialog.open()
    }

    /// Complete the pending pick with `name` and close.
    pub fn complete(&self, name: SmolStr) {
        let pending = self.pending.borrow_mut().take();
        if let Some(on_pick) = pending {
            on_pick(name);
        }
        self.dialog.close();
    }
}

/// `MemberPicker` that opens the member dialog, building it on first use.
pub struct DialogMemberPicker {
    config: Rc<ContentConfig>,
    on_close: Rc<dyn Fn()>,
    dialog: RefCell<Option<Rc<MemberDialog>>>,
}

impl DialogMemberPicker {
    pub fn new(config: Rc<ContentConfig>, on_close: Rc<dyn Fn()>) -> Self {
        Self {
            config,
            on_close,
            dialog: RefCell::new(None),
        }
    }

    fn dialog(&self) -> Result<Rc<MemberDialog>, PlatformError> {
        if let Some(dialog) = self.dialog.borrow().as_ref() {
            return Ok(dialog.clone());
        }

        let document = crate::document()?;
        let page_users = crate::discovery::query_all(&document, &self.config.page_user_selector)
            .into_iter()
            .filter_map(|el| el.text_content());
        let candidates = MemberCandidates::new(Vec::<SmolStr>::new(), page_users);

        let dialog = MemberDialog::build(
            &document,
            &self.config.dialog_title,
            &candidates.page_users,
            self.on_close.clone(),
        )?;
        *self.dialog.borrow_mut() = Some(dialog.clone());

        let url = self.config.friends_url();
        let target = dialog.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let friends = crate::friends::friend_names_or_empty(&url).await;
            let candidates = MemberCandidates::new(friends, Vec::<SmolStr>::new());
            if let Err(e) = target.set_suggestions(&candidates.friends) {
                tracing::warn!("failed to fill member suggestions: {}", e);
            }
        });
        Ok(dialog)
    }
}

impl MemberPicker for DialogMemberPicker {
    fn pick_member(&self, on_pick: PickCallback) {
        let opened = self.dialog().and_then(|dialog| dialog.open(on_pick));
        if let Err(e) = opened {
            tracing::warn!("member dialog unavailable: {}", e);
        }
    }
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, PlatformError> {
    document
        .create_element(tag)
        .map_err(js_error)?
        .dyn_into::<T>()
        .map_err(|el| PlatformError(format!("<{tag}> created as {:?}", el.tag_name())))
}

fn append(parent: &Element, child: &Element) -> Result<(), PlatformError> {
    parent.append_child(child).map(|_| ()).map_err(js_error)
}

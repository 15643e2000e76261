//! Platform abstraction traits for the bindings' external collaborators.
//!
//! These traits define the interface between the binding logic and the host
//! (browser extension, native test harness). Requests complete through a
//! callback that may run synchronously or at any later point on the same
//! thread, so hosts can back them with dialogs, network calls or extension
//! messaging without blocking the event loop.

use smol_str::SmolStr;

/// Error type for platform operations.
#[derive(Debug, Clone)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Completion for a member pick. Called at most once, with the chosen name.
pub type PickCallback = Box<dyn FnOnce(SmolStr)>;

/// Completion for a URL request. `None` when no value is available.
pub type UrlCallback = Box<dyn FnOnce(Option<String>)>;

/// Lets the user choose a forum member name.
///
/// Implementations present whatever UI they like and call `on_pick` with
/// the chosen name. A dismissed picker simply drops the callback.
pub trait MemberPicker {
    fn pick_member(&self, on_pick: PickCallback);
}

/// Supplies a URL (typically the clipboard content) for the url tag.
///
/// Failures are reported by calling `on_value(None)` or by dropping the
/// callback; they are never surfaced to the user.
pub trait UrlSource {
    fn request_url(&self, on_value: UrlCallback);
}

/// Picker that never picks. Used when no dialog is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMemberPicker;

impl MemberPicker for NoMemberPicker {
    fn pick_member(&self, _on_pick: PickCallback) {
        tracing::debug!("no member picker configured");
    }
}

/// URL source that never yields a value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUrlSource;

impl UrlSource for NoUrlSource {
    fn request_url(&self, on_value: UrlCallback) {
        on_value(None);
    }
}

/// Collaborator backed by a fixed answer, answering synchronously.
///
/// Useful for native callers and tests.
#[derive(Debug, Default, Clone)]
pub struct FixedAnswer(pub Option<String>);

impl MemberPicker for FixedAnswer {
    fn pick_member(&self, on_pick: PickCallback) {
        if let Some(name) = &self.0 {
            on_pick(SmolStr::new(name));
        }
    }
}

impl UrlSource for FixedAnswer {
    fn request_url(&self, on_value: UrlCallback) {
        on_value(self.0.clone());
    }
}

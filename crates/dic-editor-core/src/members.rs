//! Member name candidates for the member picker.

use smol_str::SmolStr;

/// Names offered by the member picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberCandidates {
    /// The user's friends, offered as autocomplete suggestions.
    pub friends: Vec<SmolStr>,
    /// People who posted on the current page, offered as one-click choices.
    pub page_users: Vec<SmolStr>,
}

impl MemberCandidates {
    pub fn new<F, P>(friends: F, page_users: P) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            friends: dedup_names(friends),
            page_users: dedup_names(page_users),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty() && self.page_users.is_empty()
    }
}

/// Collect the author names shown on a page.
///
/// Names are trimmed, blanks dropped and repeats removed, keeping the order
/// in which they first appear.
pub fn collect_page_users<I>(names: I) -> Vec<SmolStr>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    dedup_names(names)
}

fn dedup_names<I>(names: I) -> Vec<SmolStr>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<SmolStr> = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() || out.iter().any(|n| n == name) {
            continue;
        }
        out.push(SmolStr::new(name));
    }
    out
}

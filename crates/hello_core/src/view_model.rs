use serde::Serialize;

use crate::RevealJob;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageViewModel {
    /// `None` when the page has no title element.
    pub title: Option<TitleView>,
    /// One entry per message container; `None` for skipped containers.
    pub messages: Vec<Option<MessageView>>,
    pub flyout_visible: bool,
    pub toast: Option<ToastView>,
    pub terms: Vec<TermView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleView {
    pub text: String,
    /// The `typing-animation` class, added once the title is fully typed.
    pub typing_class: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub label: Option<String>,
    /// Revealed prefix of the body.
    pub body: String,
    pub complete: bool,
    pub opaque: bool,
}

impl MessageView {
    pub(crate) fn from_job(job: &RevealJob) -> Self {
        Self {
            label: job.label().map(str::to_string),
            body: job.revealed().to_string(),
            complete: job.is_complete(),
            opaque: job.force_opaque(),
        }
    }

    /// Text as the reader sees it: the label, then the revealed body.
    pub fn display(&self) -> String {
        match (&self.label, self.body.is_empty()) {
            (Some(label), false) => format!("{label} {}", self.body),
            (Some(label), true) => label.clone(),
            (None, _) => self.body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
    pub text: String,
    pub visible: bool,
}

impl ToastView {
    pub fn aria_hidden(&self) -> bool {
        !self.visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermView {
    pub text: String,
    pub term: Option<String>,
    pub aria_label: String,
    /// Terms are focusable buttons: `tabindex=0`, `role=button`.
    pub tabindex: i32,
    pub role: &'static str,
    pub highlighted: bool,
}

impl TermView {
    pub const TABINDEX: i32 = 0;
    pub const ROLE: &'static str = "button";
}

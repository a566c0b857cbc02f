use crate::view_model::{MessageView, PageViewModel, TermView, TitleView, ToastView};
use crate::{Glossary, JobKey, Message, PageConfig, TypingAnimator};

/// Which of the optional page elements exist. Interactions whose element is
/// missing are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementPresence {
    pub title: bool,
    pub secret_emoji: bool,
    pub flyout: bool,
    pub close_flyout: bool,
    pub toast: bool,
    pub share_twitter: bool,
    pub share_copy: bool,
}

impl ElementPresence {
    pub fn all() -> Self {
        Self {
            title: true,
            secret_emoji: true,
            flyout: true,
            close_flyout: true,
            toast: true,
            share_twitter: true,
            share_copy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSnapshot {
    /// `data-term` value; `None` when the attribute is empty.
    pub term: Option<String>,
    pub text: String,
}

/// Everything the page script reads from the document at load time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    pub elements: ElementPresence,
    /// One slot per message container, `None` when it has no body element.
    pub messages: Vec<Option<Message>>,
    pub terms: Vec<TermSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TermState {
    pub(crate) term: Option<String>,
    pub(crate) text: String,
    pub(crate) aria_label: String,
    pub(crate) highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToastState {
    pub(crate) text: String,
    pub(crate) visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub(crate) config: PageConfig,
    pub(crate) glossary: Glossary,
    pub(crate) elements: ElementPresence,
    pub(crate) animator: TypingAnimator,
    pub(crate) message_slots: usize,
    pub(crate) title_class_applied: bool,
    pub(crate) flyout_open: bool,
    pub(crate) toast: Option<ToastState>,
    pub(crate) terms: Vec<TermState>,
    dirty: bool,
}

impl PageState {
    pub fn new(config: PageConfig, glossary: Glossary) -> Self {
        Self {
            config,
            glossary,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn animator(&self) -> &TypingAnimator {
        &self.animator
    }

    pub fn view(&self) -> PageViewModel {
        let title = self.elements.title.then(|| {
            let job = self.animator.job(&JobKey::Title);
            TitleView {
                text: job.map(|job| job.revealed().to_string()).unwrap_or_default(),
                typing_class: self.title_class_applied,
            }
        });

        let messages = (0..self.message_slots)
            .map(|index| {
                self.animator
                    .job(&JobKey::Message(index))
                    .map(MessageView::from_job)
            })
            .collect();

        let toast = self
            .toast
            .as_ref()
            .filter(|_| self.elements.toast)
            .map(|toast| ToastView {
                text: toast.text.clone(),
                visible: toast.visible,
            });

        let terms = self
            .terms
            .iter()
            .map(|term| TermView {
                text: term.text.clone(),
                term: term.term.clone(),
                aria_label: term.aria_label.clone(),
                tabindex: TermView::TABINDEX,
                role: TermView::ROLE,
                highlighted: term.highlighted,
            })
            .collect();

        PageViewModel {
            title,
            messages,
            flyout_visible: self.elements.flyout && self.flyout_open,
            toast,
            terms,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything visible changed since the last call, and resets
    /// the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

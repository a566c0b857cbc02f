use crate::{PageSnapshot, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Keys that activate button-like elements.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Where a document-level click landed, relative to the glossary flyout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Flyout,
    SecretEmoji,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page parsed; starts the title and message animations.
    PageLoaded(PageSnapshot),
    /// A scheduled timer elapsed.
    TimerFired(TimerId),
    /// Navigation away or explicit reset: stop every reveal job.
    CancelAnimations,
    /// User clicked the secret emoji.
    EmojiActivated,
    /// Key pressed while the secret emoji has focus.
    EmojiKeyPressed(Key),
    CloseFlyoutClicked,
    /// Document-level key press.
    KeyPressed(Key),
    /// Document-level click.
    DocumentClicked(ClickTarget),
    /// User clicked the glossary term at this index.
    TermActivated(usize),
    TermKeyPressed { index: usize, key: Key },
    /// User clicked the social share button; the host picks the phrase.
    ShareTwitterClicked { phrase_index: usize },
    /// The host could not open the share URL.
    ShareFailed,
    CopyLinkClicked,
    /// Clipboard collaborator finished, after its fallback if needed.
    CopyFinished { success: bool },
    /// Fallback for placeholder wiring.
    NoOp,
}

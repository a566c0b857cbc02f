//! YesHello core: pure page state machine, typing animator and view-model helpers.
mod animator;
mod config;
mod effect;
mod glossary;
mod message;
mod msg;
mod share;
mod state;
mod timer;
mod toast;
mod update;
mod view_model;

pub use animator::{RevealJob, RevealPhase, RevealProgress, TypingAnimator};
pub use config::{AnimatorConfig, PageConfig};
pub use effect::Effect;
pub use glossary::{aria_label, Glossary};
pub use message::Message;
pub use msg::{ClickTarget, Key, Msg};
pub use share::{share_phrase, twitter_intent_url, SHARE_PHRASES};
pub use state::{ElementPresence, PageSnapshot, PageState, TermSnapshot};
pub use timer::{JobKey, TimerId};
pub use toast::{with_flair, COPY_FAILED, LINK_COPIED, LINK_COPIED_SLAY, SHARE_FAILED};
pub use update::update;
pub use view_model::{MessageView, PageViewModel, TermView, TitleView, ToastView};

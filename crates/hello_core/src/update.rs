use page_logging::{page_debug, page_error, page_info};

use crate::state::{TermState, ToastState};
use crate::{
    share_phrase, toast, twitter_intent_url, ClickTarget, Effect, JobKey, Key, Msg, PageSnapshot,
    PageState, RevealProgress, TimerId,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::PageLoaded(snapshot) => load_page(&mut state, snapshot, &mut effects),
        Msg::TimerFired(timer) => timer_fired(&mut state, timer, &mut effects),
        Msg::CancelAnimations => effects = state.animator.cancel_all(),
        Msg::EmojiActivated => {
            if state.elements.secret_emoji {
                set_flyout(&mut state, true);
            }
        }
        // Escape on a focused element bubbles up to the document handler.
        Msg::EmojiKeyPressed(Key::Escape) => set_flyout(&mut state, false),
        Msg::EmojiKeyPressed(key) => {
            if state.elements.secret_emoji && key.activates() {
                set_flyout(&mut state, true);
            }
        }
        Msg::CloseFlyoutClicked => {
            if state.elements.close_flyout {
                set_flyout(&mut state, false);
            }
        }
        Msg::KeyPressed(Key::Escape) => set_flyout(&mut state, false),
        Msg::KeyPressed(_) => {}
        Msg::DocumentClicked(ClickTarget::Elsewhere) => set_flyout(&mut state, false),
        Msg::DocumentClicked(ClickTarget::Flyout | ClickTarget::SecretEmoji) => {}
        Msg::TermActivated(index) => highlight_term(&mut state, index, &mut effects),
        Msg::TermKeyPressed {
            key: Key::Escape, ..
        } => set_flyout(&mut state, false),
        Msg::TermKeyPressed { index, key } => {
            if key.activates() {
                highlight_term(&mut state, index, &mut effects);
            }
        }
        Msg::ShareTwitterClicked { phrase_index } => {
            if state.elements.share_twitter {
                share_on_twitter(&mut state, phrase_index, &mut effects);
            }
        }
        Msg::ShareFailed => show_toast(&mut state, toast::SHARE_FAILED, &mut effects),
        Msg::CopyLinkClicked => {
            if state.elements.share_copy {
                effects.push(Effect::CopyToClipboard {
                    text: state.config.page_url.clone(),
                });
            }
        }
        Msg::CopyFinished { success } => {
            let message = if success {
                toast::LINK_COPIED_SLAY
            } else {
                toast::COPY_FAILED
            };
            show_toast(&mut state, message, &mut effects);
        }
        Msg::NoOp => {}
    }

    (state, effects)
}

fn load_page(state: &mut PageState, snapshot: PageSnapshot, effects: &mut Vec<Effect>) {
    let reduced_motion = state.config.animator.reduced_motion;
    page_info!(
        "page loaded: {} message slots, {} terms, reduced_motion={}",
        snapshot.messages.len(),
        snapshot.terms.len(),
        reduced_motion
    );

    state.elements = snapshot.elements;
    state.message_slots = snapshot.messages.len();
    state.title_class_applied = false;
    state.terms = snapshot
        .terms
        .into_iter()
        .map(|term| TermState {
            aria_label: state.glossary.aria_label(&term.text, term.term.as_deref()),
            term: term.term,
            text: term.text,
            highlighted: false,
        })
        .collect();

    if state.elements.title {
        let title_text = state.config.title_text.clone();
        let interval_ms = state.config.title_tick_interval_ms;
        effects.extend(
            state
                .animator
                .begin_title(&title_text, interval_ms, reduced_motion),
        );
    }
    let animator_config = state.config.animator.clone();
    effects.extend(
        state
            .animator
            .begin_messages(&snapshot.messages, &animator_config),
    );
    state.mark_dirty();
}

fn timer_fired(state: &mut PageState, timer: TimerId, effects: &mut Vec<Effect>) {
    match timer {
        TimerId::RevealStart(key) => {
            let progress = state.animator.handle_start(&key, effects);
            reveal_progressed(state, &key, progress);
        }
        TimerId::RevealTick(key) => {
            let progress = state.animator.handle_tick(&key, effects);
            reveal_progressed(state, &key, progress);
        }
        TimerId::ToastHide => {
            if let Some(toast) = state.toast.as_mut().filter(|toast| toast.visible) {
                toast.visible = false;
                state.mark_dirty();
            }
        }
        TimerId::TermHighlight(index) => {
            if let Some(term) = state.terms.get_mut(index).filter(|term| term.highlighted) {
                term.highlighted = false;
                state.mark_dirty();
            }
        }
    }
}

fn reveal_progressed(state: &mut PageState, key: &JobKey, progress: RevealProgress) {
    match progress {
        RevealProgress::Ignored => {}
        // Starting only swaps timers; the display changes on the first tick.
        RevealProgress::Started => {}
        RevealProgress::Advanced => state.mark_dirty(),
        RevealProgress::Completed => {
            if *key == JobKey::Title {
                state.title_class_applied = true;
            }
            state.mark_dirty();
        }
    }
}

fn set_flyout(state: &mut PageState, open: bool) {
    if !state.elements.flyout || state.flyout_open == open {
        return;
    }
    page_debug!("glossary flyout {}", if open { "opened" } else { "closed" });
    state.flyout_open = open;
    state.mark_dirty();
}

fn highlight_term(state: &mut PageState, index: usize, effects: &mut Vec<Effect>) {
    let duration = state.config.highlight_duration_ms;
    let Some(term) = state.terms.get_mut(index) else {
        return;
    };
    term.highlighted = true;
    effects.push(Effect::ScheduleTimeout {
        timer: TimerId::TermHighlight(index),
        delay_ms: duration,
    });
    state.mark_dirty();
}

fn share_on_twitter(state: &mut PageState, phrase_index: usize, effects: &mut Vec<Effect>) {
    match twitter_intent_url(share_phrase(phrase_index), &state.config.page_url) {
        Ok(url) => effects.push(Effect::OpenShareUrl { url }),
        Err(err) => {
            page_error!("Error building share url: {}", err);
            show_toast(state, toast::SHARE_FAILED, effects);
        }
    }
}

fn show_toast(state: &mut PageState, message: &str, effects: &mut Vec<Effect>) {
    if !state.elements.toast {
        return;
    }
    state.toast = Some(ToastState {
        text: toast::with_flair(message),
        visible: true,
    });
    effects.push(Effect::ScheduleTimeout {
        timer: TimerId::ToastHide,
        delay_ms: state.config.toast_duration_ms,
    });
    state.mark_dirty();
}

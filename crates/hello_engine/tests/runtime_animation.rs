use std::sync::Once;

use hello_core::{
    AnimatorConfig, ElementPresence, Glossary, Message, Msg, PageConfig, PageSnapshot, PageState,
    PageViewModel,
};
use hello_engine::{PageRuntime, Services};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn runtime(animator: AnimatorConfig, messages: Vec<Option<Message>>) -> PageRuntime {
    let config = PageConfig {
        animator,
        ..PageConfig::default()
    };
    let mut runtime = PageRuntime::new(
        PageState::new(config, Glossary::builtin()),
        Services::default(),
    );
    runtime.load(PageSnapshot {
        elements: ElementPresence::all(),
        messages,
        terms: Vec::new(),
    });
    runtime
}

fn animator(base_delay_ms: u64, tick_interval_ms: u64) -> AnimatorConfig {
    AnimatorConfig {
        base_delay_ms,
        tick_interval_ms,
        first_tick_interval_ms: None,
        reduced_motion: false,
    }
}

fn display(view: &PageViewModel, index: usize) -> String {
    view.messages[index]
        .as_ref()
        .map(|m| m.display())
        .unwrap_or_default()
}

fn alex_and_sam() -> Vec<Option<Message>> {
    vec![
        Some(Message::labeled("Alex:", "Hello")),
        Some(Message::labeled("Sam:", "hi")),
    ]
}

#[test]
fn alex_finishes_long_before_sam_starts() {
    init_logging();
    let mut runtime = runtime(animator(1000, 50), alex_and_sam());

    runtime.advance_to(250);
    let view = runtime.view();
    assert_eq!(display(&view, 0), "Alex: Hello");
    assert!(view.messages[0].as_ref().unwrap().complete);
    assert_eq!(display(&view, 1), "Sam:");

    runtime.advance_to(999);
    assert_eq!(display(&runtime.view(), 1), "Sam:");

    runtime.advance_to(1050);
    assert_eq!(display(&runtime.view(), 1), "Sam: h");

    runtime.run_to_idle(60_000);
    let view = runtime.view();
    assert_eq!(display(&view, 1), "Sam: hi");
    assert!(view.messages[1].as_ref().unwrap().complete);
}

#[test]
fn labels_are_identical_at_every_step_and_terminal_state_is_stable() {
    init_logging();
    let messages = vec![
        Some(Message::labeled("Alex:", "Hello")),
        Some(Message::labeled("Sam:", "hi")),
        Some(Message::labeled("Alex:", "so... about that")),
    ];
    let mut runtime = runtime(animator(300, 20), messages.clone());

    let mut partial_states = 0;
    while runtime.now_ms() < 5_000 {
        runtime.advance_by(10);
        let view = runtime.view();
        for (index, message) in messages.iter().flatten().enumerate() {
            let shown = view.messages[index].as_ref().unwrap();
            assert_eq!(shown.label, message.label);
            assert!(message.body.starts_with(&shown.body));
            if !shown.complete && !shown.body.is_empty() {
                partial_states += 1;
            }
        }
    }
    assert!(partial_states > 0);
    assert_eq!(runtime.pending_timers(), 0);

    let settled = runtime.view();
    runtime.advance_by(10_000);
    assert_eq!(runtime.view(), settled);
    for (index, message) in messages.iter().flatten().enumerate() {
        assert_eq!(settled.messages[index].as_ref().unwrap().body, message.body);
    }
}

#[test]
fn body_is_complete_exactly_after_its_ticks() {
    init_logging();
    let mut runtime = runtime(
        animator(1000, 50),
        vec![None, Some(Message::labeled("Sam:", "hey"))],
    );

    // Message 1 starts at 1000ms; three ticks at 1050, 1100, 1150.
    runtime.advance_to(1149);
    let shown = runtime.view().messages[1].clone().unwrap();
    assert_eq!(shown.body, "he");
    assert!(!shown.complete);

    runtime.advance_to(1150);
    let shown = runtime.view().messages[1].clone().unwrap();
    assert_eq!(shown.body, "hey");
    assert!(shown.complete);
    assert!(runtime.view().messages[0].is_none());
}

#[test]
fn reduced_motion_has_no_intermediate_states() {
    init_logging();
    let reduced = AnimatorConfig {
        reduced_motion: true,
        ..animator(1000, 50)
    };
    let mut runtime = runtime(reduced, alex_and_sam());

    let view = runtime
        .take_dirty_view()
        .expect("page load renders once");
    assert_eq!(display(&view, 0), "Alex: Hello");
    assert_eq!(display(&view, 1), "Sam: hi");
    assert!(view.messages.iter().flatten().all(|m| m.complete && m.opaque));
    assert_eq!(view.title.unwrap().text, "Yes, Hello! Bet!");
    assert_eq!(runtime.pending_timers(), 0);

    runtime.advance_by(60_000);
    assert!(runtime.take_dirty_view().is_none());
}

#[test]
fn cancel_after_first_message_freezes_the_rest_forever() {
    init_logging();
    let messages = vec![
        Some(Message::labeled("Alex:", "Hello")),
        Some(Message::labeled("Sam:", "hi there")),
        Some(Message::labeled("Alex:", "so...")),
    ];
    let mut runtime = runtime(animator(1000, 50), messages);

    // Message 0 done at 250ms; message 1 shows "h" after its first tick at 1050ms.
    runtime.advance_to(1060);
    assert_eq!(display(&runtime.view(), 0), "Alex: Hello");
    assert_eq!(display(&runtime.view(), 1), "Sam: h");

    runtime.dispatch(Msg::CancelAnimations);
    runtime.dispatch(Msg::CancelAnimations);
    assert_eq!(runtime.pending_timers(), 0);

    let frozen = runtime.view();
    runtime.advance_by(120_000);
    assert_eq!(runtime.view(), frozen);
    assert_eq!(display(&frozen, 1), "Sam: h");
    assert_eq!(display(&frozen, 2), "Alex:");
}

#[test]
fn empty_body_completes_after_its_start_delay() {
    init_logging();
    let mut runtime = runtime(
        animator(1000, 50),
        vec![Some(Message::new("a")), Some(Message::labeled("Sam:", ""))],
    );

    runtime.advance_to(999);
    assert!(!runtime.view().messages[1].as_ref().unwrap().complete);
    runtime.advance_to(1000);
    let shown = runtime.view().messages[1].clone().unwrap();
    assert!(shown.complete);
    assert_eq!(shown.display(), "Sam:");
}

#[test]
fn title_types_then_gets_its_class() {
    init_logging();
    let mut runtime = runtime(animator(1000, 50), Vec::new());

    runtime.advance_to(500);
    let title = runtime.view().title.unwrap();
    assert_eq!(title.text, "Yes, ");
    assert!(!title.typing_class);

    // 16 characters at 100ms each.
    runtime.advance_to(1600);
    let title = runtime.view().title.unwrap();
    assert_eq!(title.text, "Yes, Hello! Bet!");
    assert!(title.typing_class);
}

use std::sync::Once;

use hello_core::{
    AnimatorConfig, Effect, JobKey, Message, RevealPhase, RevealProgress, TimerId, TypingAnimator,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn config(base_delay_ms: u64, tick_interval_ms: u64) -> AnimatorConfig {
    AnimatorConfig {
        base_delay_ms,
        tick_interval_ms,
        first_tick_interval_ms: None,
        reduced_motion: false,
    }
}

fn chat() -> Vec<Option<Message>> {
    vec![
        Some(Message::labeled("Alex:", "Hello")),
        Some(Message::labeled("Sam:", "hi")),
        Some(Message::labeled("Alex:", "so... about that thing")),
    ]
}

#[test]
fn begin_schedules_staggered_start_timers() {
    init_logging();
    let mut animator = TypingAnimator::new();
    let effects = animator.begin_messages(&chat(), &config(1000, 50));

    assert_eq!(
        effects,
        vec![
            Effect::ScheduleTimeout {
                timer: TimerId::RevealStart(JobKey::Message(0)),
                delay_ms: 0,
            },
            Effect::ScheduleTimeout {
                timer: TimerId::RevealStart(JobKey::Message(1)),
                delay_ms: 1000,
            },
            Effect::ScheduleTimeout {
                timer: TimerId::RevealStart(JobKey::Message(2)),
                delay_ms: 4000,
            },
        ]
    );
    for index in 0..3 {
        let job = animator.job(&JobKey::Message(index)).unwrap();
        assert_eq!(job.phase(), RevealPhase::Waiting);
        assert_eq!(job.revealed(), "");
    }
}

#[test]
fn body_is_fully_revealed_after_length_ticks_and_label_never_changes() {
    init_logging();
    let mut animator = TypingAnimator::new();
    let key = JobKey::Message(0);
    animator.begin_messages(&chat(), &config(1000, 50));

    let mut effects = Vec::new();
    assert_eq!(animator.handle_start(&key, &mut effects), RevealProgress::Started);
    assert_eq!(
        effects,
        vec![Effect::ScheduleInterval {
            timer: TimerId::RevealTick(key.clone()),
            interval_ms: 50,
        }]
    );

    let mut seen = Vec::new();
    for _ in 0.."Hello".len() {
        effects.clear();
        animator.handle_tick(&key, &mut effects);
        let job = animator.job(&key).unwrap();
        assert_eq!(job.label(), Some("Alex:"));
        seen.push(job.revealed().to_string());
    }
    assert_eq!(seen, vec!["H", "He", "Hel", "Hell", "Hello"]);
    assert_eq!(
        effects,
        vec![Effect::ClearTimer {
            timer: TimerId::RevealTick(key.clone()),
        }]
    );

    // Terminal state is stable.
    effects.clear();
    assert_eq!(animator.handle_tick(&key, &mut effects), RevealProgress::Ignored);
    assert_eq!(animator.handle_start(&key, &mut effects), RevealProgress::Ignored);
    assert!(effects.is_empty());
    let job = animator.job(&key).unwrap();
    assert!(job.is_complete());
    assert_eq!(job.revealed(), "Hello");
    assert_eq!(job.body(), "Hello");
}

#[test]
fn empty_body_completes_on_start_without_interval() {
    init_logging();
    let mut animator = TypingAnimator::new();
    let key = JobKey::Message(0);
    animator.begin_messages(&[Some(Message::labeled("Alex:", ""))], &config(1000, 50));

    let mut effects = Vec::new();
    assert_eq!(animator.handle_start(&key, &mut effects), RevealProgress::Completed);
    assert!(effects.is_empty());
    assert!(animator.job(&key).unwrap().is_complete());
    assert!(animator.is_idle());
}

#[test]
fn missing_slots_are_skipped_without_aborting_the_batch() {
    init_logging();
    let mut animator = TypingAnimator::new();
    let slots = vec![
        Some(Message::new("first")),
        None,
        Some(Message::new("third")),
    ];
    let effects = animator.begin_messages(&slots, &config(1000, 50));

    assert_eq!(
        effects,
        vec![
            Effect::ScheduleTimeout {
                timer: TimerId::RevealStart(JobKey::Message(0)),
                delay_ms: 0,
            },
            Effect::ScheduleTimeout {
                timer: TimerId::RevealStart(JobKey::Message(2)),
                delay_ms: 4000,
            },
        ]
    );
    assert!(animator.job(&JobKey::Message(1)).is_none());
}

#[test]
fn reduced_motion_reveals_everything_in_one_step() {
    init_logging();
    let mut animator = TypingAnimator::new();
    let reduced = AnimatorConfig {
        reduced_motion: true,
        ..config(1000, 50)
    };

    let effects = animator.begin_messages(&chat(), &reduced);

    assert!(effects.is_empty());
    assert!(animator.is_idle());
    for (index, message) in chat().into_iter().flatten().enumerate() {
        let job = animator.job(&JobKey::Message(index)).unwrap();
        assert!(job.is_complete());
        assert!(job.force_opaque());
        assert_eq!(job.revealed(), message.body);
        assert_eq!(job.label(), message.label.as_deref());
    }
}

#[test]
fn cancel_after_first_message_freezes_the_rest() {
    init_logging();
    let mut animator = TypingAnimator::new();
    animator.begin_messages(&chat(), &config(1000, 50));

    let first = JobKey::Message(0);
    let second = JobKey::Message(1);
    let mut effects = Vec::new();
    animator.handle_start(&first, &mut effects);
    for _ in 0..5 {
        animator.handle_tick(&first, &mut effects);
    }
    animator.handle_start(&second, &mut effects);
    animator.handle_tick(&second, &mut effects);

    let effects = animator.cancel_all();
    assert_eq!(
        effects,
        vec![
            Effect::ClearTimer {
                timer: TimerId::RevealTick(JobKey::Message(1)),
            },
            Effect::ClearTimer {
                timer: TimerId::RevealStart(JobKey::Message(2)),
            },
        ]
    );

    // Late timer firings do nothing.
    let mut late = Vec::new();
    assert_eq!(animator.handle_tick(&second, &mut late), RevealProgress::Ignored);
    assert_eq!(
        animator.handle_start(&JobKey::Message(2), &mut late),
        RevealProgress::Ignored
    );
    assert!(late.is_empty());

    assert_eq!(animator.job(&first).unwrap().revealed(), "Hello");
    assert_eq!(animator.job(&second).unwrap().revealed(), "h");
    assert_eq!(animator.job(&second).unwrap().phase(), RevealPhase::Cancelled);
    assert_eq!(animator.job(&JobKey::Message(2)).unwrap().revealed(), "");
}

#[test]
fn cancel_is_idempotent() {
    init_logging();
    let mut animator = TypingAnimator::new();
    assert!(animator.cancel_all().is_empty());

    animator.begin_messages(&chat(), &config(1000, 50));
    assert_eq!(animator.cancel_all().len(), 3);
    assert!(animator.cancel_all().is_empty());
    assert!(animator.is_idle());
}

#[test]
fn title_starts_immediately_and_is_cancellable() {
    init_logging();
    let mut animator = TypingAnimator::new();
    let effects = animator.begin_title("Yes, Hello! Bet!", 100, false);
    assert_eq!(
        effects,
        vec![Effect::ScheduleTimeout {
            timer: TimerId::RevealStart(JobKey::Title),
            delay_ms: 0,
        }]
    );

    let mut effects = Vec::new();
    animator.handle_start(&JobKey::Title, &mut effects);
    animator.handle_tick(&JobKey::Title, &mut effects);
    assert_eq!(animator.job(&JobKey::Title).unwrap().revealed(), "Y");

    assert_eq!(
        animator.cancel_all(),
        vec![Effect::ClearTimer {
            timer: TimerId::RevealTick(JobKey::Title),
        }]
    );
}

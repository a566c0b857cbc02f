use std::collections::BTreeMap;

use page_logging::{page_debug, page_trace};
use serde::Serialize;

use crate::{AnimatorConfig, Effect, JobKey, Message, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealPhase {
    /// Start timer pending; only the label is shown.
    Waiting,
    /// Tick interval running.
    Revealing,
    Done,
    Cancelled,
}

/// What a timer firing did to a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealProgress {
    /// Unknown job, or the job is not in the phase the timer belongs to.
    Ignored,
    Started,
    Advanced,
    Completed,
}

/// Per-message reveal state. The source text is never modified; only
/// `revealed_chars` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealJob {
    label: Option<String>,
    body: String,
    total_chars: usize,
    revealed_chars: usize,
    interval_ms: u64,
    phase: RevealPhase,
    force_opaque: bool,
}

impl RevealJob {
    fn pending(message: &Message, interval_ms: u64) -> Self {
        Self {
            label: message.label.clone(),
            body: message.body.clone(),
            total_chars: message.body.chars().count(),
            revealed_chars: 0,
            interval_ms,
            phase: RevealPhase::Waiting,
            force_opaque: false,
        }
    }

    fn revealed_at_once(message: &Message) -> Self {
        let total_chars = message.body.chars().count();
        Self {
            label: message.label.clone(),
            body: message.body.clone(),
            total_chars,
            revealed_chars: total_chars,
            interval_ms: 0,
            phase: RevealPhase::Done,
            force_opaque: true,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The currently displayed prefix of the body.
    pub fn revealed(&self) -> &str {
        match self.body.char_indices().nth(self.revealed_chars) {
            Some((end, _)) => &self.body[..end],
            None => &self.body,
        }
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Done
    }

    /// Set for reduced-motion reveals, which skip the fade-in as well.
    pub fn force_opaque(&self) -> bool {
        self.force_opaque
    }

    /// The timer currently owned by this job, if any.
    fn live_timer(&self, key: &JobKey) -> Option<TimerId> {
        match self.phase {
            RevealPhase::Waiting => Some(TimerId::RevealStart(key.clone())),
            RevealPhase::Revealing => Some(TimerId::RevealTick(key.clone())),
            RevealPhase::Done | RevealPhase::Cancelled => None,
        }
    }
}

/// Staggered typing animation over the page title and the chat messages.
///
/// The animator never touches a clock itself: it emits timer effects and is
/// driven by `handle_start` / `handle_tick` when those timers fire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypingAnimator {
    jobs: BTreeMap<JobKey, RevealJob>,
}

impl TypingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules one reveal job per present message. Absent slots are skipped.
    /// Any message jobs from an earlier batch are cancelled first.
    pub fn begin_messages(
        &mut self,
        slots: &[Option<Message>],
        config: &AnimatorConfig,
    ) -> Vec<Effect> {
        let mut effects = self.clear_where(|key| matches!(key, JobKey::Message(_)));
        self.jobs.retain(|key, _| !matches!(key, JobKey::Message(_)));

        for (index, slot) in slots.iter().enumerate() {
            let Some(message) = slot else {
                page_debug!("message slot {} missing, skipped", index);
                continue;
            };
            let key = JobKey::Message(index);
            if config.reduced_motion {
                self.jobs.insert(key, RevealJob::revealed_at_once(message));
                continue;
            }
            let delay_ms = config.start_delay_ms(index);
            let job = RevealJob::pending(message, config.tick_interval_for(index));
            page_trace!(
                "message {} scheduled: delay={}ms interval={}ms chars={}",
                index,
                delay_ms,
                job.interval_ms,
                job.total_chars
            );
            self.jobs.insert(key.clone(), job);
            effects.push(Effect::ScheduleTimeout {
                timer: TimerId::RevealStart(key),
                delay_ms,
            });
        }
        effects
    }

    /// Types `text` into the title, starting right away.
    pub fn begin_title(
        &mut self,
        text: &str,
        interval_ms: u64,
        reduced_motion: bool,
    ) -> Vec<Effect> {
        let mut effects = self.clear_where(|key| *key == JobKey::Title);
        let message = Message::new(text);
        if reduced_motion {
            self.jobs.insert(JobKey::Title, RevealJob::revealed_at_once(&message));
            return effects;
        }
        self.jobs.insert(JobKey::Title, RevealJob::pending(&message, interval_ms));
        effects.push(Effect::ScheduleTimeout {
            timer: TimerId::RevealStart(JobKey::Title),
            delay_ms: 0,
        });
        effects
    }

    /// Start timer fired: switch the job onto its repeating tick interval.
    pub fn handle_start(&mut self, key: &JobKey, effects: &mut Vec<Effect>) -> RevealProgress {
        let Some(job) = self.jobs.get_mut(key) else {
            return RevealProgress::Ignored;
        };
        if job.phase != RevealPhase::Waiting {
            return RevealProgress::Ignored;
        }
        if job.total_chars == 0 {
            job.phase = RevealPhase::Done;
            page_debug!("{:?} has an empty body, done immediately", key);
            return RevealProgress::Completed;
        }
        job.phase = RevealPhase::Revealing;
        effects.push(Effect::ScheduleInterval {
            timer: TimerId::RevealTick(key.clone()),
            interval_ms: job.interval_ms,
        });
        RevealProgress::Started
    }

    /// Tick interval fired: reveal one more character, clearing the interval
    /// once the whole body is visible.
    pub fn handle_tick(&mut self, key: &JobKey, effects: &mut Vec<Effect>) -> RevealProgress {
        let Some(job) = self.jobs.get_mut(key) else {
            return RevealProgress::Ignored;
        };
        if job.phase != RevealPhase::Revealing {
            return RevealProgress::Ignored;
        }
        job.revealed_chars = (job.revealed_chars + 1).min(job.total_chars);
        if job.revealed_chars < job.total_chars {
            return RevealProgress::Advanced;
        }
        job.phase = RevealPhase::Done;
        effects.push(Effect::ClearTimer {
            timer: TimerId::RevealTick(key.clone()),
        });
        page_debug!("{:?} fully revealed", key);
        RevealProgress::Completed
    }

    /// Stops every pending and running job where it stands. Safe to call
    /// repeatedly; finished and already-cancelled jobs produce no effects.
    pub fn cancel_all(&mut self) -> Vec<Effect> {
        let effects = self.clear_where(|_| true);
        if !effects.is_empty() {
            page_debug!("cancelled {} reveal timers", effects.len());
        }
        effects
    }

    pub fn job(&self, key: &JobKey) -> Option<&RevealJob> {
        self.jobs.get(key)
    }

    pub fn is_idle(&self) -> bool {
        self.jobs
            .values()
            .all(|job| matches!(job.phase, RevealPhase::Done | RevealPhase::Cancelled))
    }

    fn clear_where(&mut self, select: impl Fn(&JobKey) -> bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (key, job) in self.jobs.iter_mut().filter(|(key, _)| select(*key)) {
            if let Some(timer) = job.live_timer(key) {
                effects.push(Effect::ClearTimer { timer });
                job.phase = RevealPhase::Cancelled;
            }
        }
        effects
    }
}

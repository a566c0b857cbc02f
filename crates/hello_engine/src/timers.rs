use std::collections::BTreeMap;

use hello_core::TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerEntry {
    fire_at: u64,
    /// Scheduling order, breaks ties between timers due at the same instant.
    seq: u64,
    interval: Option<u64>,
}

/// Virtual millisecond clock with one-shot and repeating timers.
///
/// Nothing here sleeps: callers move time forward with [`TimerQueue::pop_due`]
/// and [`TimerQueue::advance_to`], which keeps page behaviour deterministic in
/// tests and lets the realtime driver map wall-clock time onto it.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    timers: BTreeMap<TimerId, TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Fires once after `delay_ms`. Replaces any live timer with the same id.
    pub fn schedule_timeout(&mut self, timer: TimerId, delay_ms: u64) {
        self.insert(timer, delay_ms, None);
    }

    /// Fires every `interval_ms` (at least 1ms) until cleared. Replaces any
    /// live timer with the same id.
    pub fn schedule_interval(&mut self, timer: TimerId, interval_ms: u64) {
        let interval_ms = interval_ms.max(1);
        self.insert(timer, interval_ms, Some(interval_ms));
    }

    /// Returns whether a live timer was removed.
    pub fn clear(&mut self, timer: &TimerId) -> bool {
        self.timers.remove(timer).is_some()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|entry| entry.fire_at).min()
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to its
    /// deadline. Intervals are re-armed before being returned.
    pub fn pop_due(&mut self, until: u64) -> Option<TimerId> {
        let (timer, entry) = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.fire_at <= until)
            .min_by_key(|(_, entry)| (entry.fire_at, entry.seq))
            .map(|(timer, entry)| (timer.clone(), *entry))?;

        self.set_now(entry.fire_at.max(self.now_ms));
        match entry.interval {
            Some(interval) => {
                let seq = self.bump_seq();
                self.timers.insert(
                    timer.clone(),
                    TimerEntry {
                        fire_at: entry.fire_at.saturating_add(interval),
                        seq,
                        interval: Some(interval),
                    },
                );
            }
            None => {
                self.timers.remove(&timer);
            }
        }
        Some(timer)
    }

    /// Moves the clock forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.set_now(now_ms);
        }
    }

    fn insert(&mut self, timer: TimerId, delay_ms: u64, interval: Option<u64>) {
        let seq = self.bump_seq();
        self.timers.insert(
            timer,
            TimerEntry {
                fire_at: self.now_ms.saturating_add(delay_ms),
                seq,
                interval,
            },
        );
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        page_logging::set_virtual_time_ms(now_ms);
    }
}

use std::collections::VecDeque;

use hello_core::{update, Effect, Msg, PageSnapshot, PageState, PageViewModel};
use page_logging::{page_error, page_info, page_trace};

use crate::clipboard::{copy_with_fallback, Clipboard, MemoryClipboard, UnavailableClipboard};
use crate::share::{RecordingOpener, ShareOpener};
use crate::TimerQueue;

/// External collaborators the page talks to.
pub struct Services {
    pub clipboard: Box<dyn Clipboard>,
    /// Tried once when `clipboard` fails.
    pub fallback_clipboard: Box<dyn Clipboard>,
    pub opener: Box<dyn ShareOpener>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            clipboard: Box::new(UnavailableClipboard),
            fallback_clipboard: Box::new(MemoryClipboard::new()),
            opener: Box::new(RecordingOpener::new()),
        }
    }
}

/// Single-threaded page host: owns the state machine, the timer queue and the
/// services, and executes effects as `update` emits them.
pub struct PageRuntime {
    state: PageState,
    timers: TimerQueue,
    services: Services,
    inbox: VecDeque<Msg>,
}

impl PageRuntime {
    pub fn new(state: PageState, services: Services) -> Self {
        Self {
            state,
            timers: TimerQueue::new(),
            services,
            inbox: VecDeque::new(),
        }
    }

    pub fn load(&mut self, snapshot: PageSnapshot) {
        self.dispatch(Msg::PageLoaded(snapshot));
    }

    /// Applies `msg` and every follow-up message its effects produce.
    pub fn dispatch(&mut self, msg: Msg) {
        self.inbox.push_back(msg);
        while let Some(msg) = self.inbox.pop_front() {
            page_trace!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                self.execute(effect);
            }
        }
    }

    /// Moves virtual time forward by `ms`, firing due timers in order.
    /// Returns the number of timers fired.
    pub fn advance_by(&mut self, ms: u64) -> usize {
        let until = self.timers.now_ms().saturating_add(ms);
        self.advance_to(until)
    }

    /// Moves virtual time forward to `until`, firing due timers in order.
    pub fn advance_to(&mut self, until: u64) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(until) {
            fired += 1;
            self.dispatch(Msg::TimerFired(timer));
        }
        self.timers.advance_to(until);
        fired
    }

    /// Runs timers until none are left or `max_ms` of virtual time has passed.
    /// Returns the virtual time spent.
    pub fn run_to_idle(&mut self, max_ms: u64) -> u64 {
        let start = self.timers.now_ms();
        let limit = start.saturating_add(max_ms);
        while let Some(deadline) = self.timers.next_deadline() {
            if deadline > limit {
                self.timers.advance_to(limit);
                break;
            }
            self.advance_to(deadline);
        }
        self.timers.now_ms() - start
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn view(&self) -> PageViewModel {
        self.state.view()
    }

    /// The view, if anything visible changed since the last call.
    pub fn take_dirty_view(&mut self) -> Option<PageViewModel> {
        let view = self.state.view();
        self.state.consume_dirty().then_some(view)
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleTimeout { timer, delay_ms } => {
                self.timers.schedule_timeout(timer, delay_ms);
            }
            Effect::ScheduleInterval { timer, interval_ms } => {
                self.timers.schedule_interval(timer, interval_ms);
            }
            Effect::ClearTimer { timer } => {
                self.timers.clear(&timer);
            }
            Effect::CopyToClipboard { text } => {
                let success = copy_with_fallback(
                    self.services.clipboard.as_ref(),
                    self.services.fallback_clipboard.as_ref(),
                    &text,
                );
                self.inbox.push_back(Msg::CopyFinished { success });
            }
            Effect::OpenShareUrl { url } => match self.services.opener.open(&url) {
                Ok(()) => page_info!("opened share url {}", url),
                Err(err) => {
                    page_error!("Error sharing to Twitter: {}", err);
                    self.inbox.push_back(Msg::ShareFailed);
                }
            },
        }
    }
}

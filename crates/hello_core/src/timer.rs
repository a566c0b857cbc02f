use serde::Serialize;

/// Identifies one reveal job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum JobKey {
    Title,
    Message(usize),
}

/// Handle for every timer the page schedules. At most one timer per id is live;
/// scheduling an id again replaces the previous timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TimerId {
    /// One-shot start delay of a reveal job.
    RevealStart(JobKey),
    /// Repeating per-character interval of a reveal job.
    RevealTick(JobKey),
    ToastHide,
    TermHighlight(usize),
}

use crate::TimerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleTimeout { timer: TimerId, delay_ms: u64 },
    ScheduleInterval { timer: TimerId, interval_ms: u64 },
    ClearTimer { timer: TimerId },
    CopyToClipboard { text: String },
    OpenShareUrl { url: String },
}

use serde::{Deserialize, Serialize};

/// Timing knobs for the staggered message animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Base gap between message starts, scaled per index by [`AnimatorConfig::start_delay_ms`].
    pub base_delay_ms: u64,
    /// Per-character reveal interval.
    pub tick_interval_ms: u64,
    /// Faster interval for the first message; `None` uses `tick_interval_ms`.
    pub first_tick_interval_ms: Option<u64>,
    /// Show every message in its final state without any timers.
    pub reduced_motion: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 1200,
            tick_interval_ms: 60,
            first_tick_interval_ms: Some(40),
            reduced_motion: false,
        }
    }
}

impl AnimatorConfig {
    /// Start delay for message `index`: `index × base_delay_ms × w(index)` where
    /// `w(0) = 0.5` and `w(i) = i` afterwards, so later messages wait
    /// super-linearly longer (0, D, 4D, 9D, ...).
    pub fn start_delay_ms(&self, index: usize) -> u64 {
        let i = index as u64;
        // w(i) in halves keeps the arithmetic integral.
        let weight_halves = if index == 0 { 1 } else { i.saturating_mul(2) };
        i.saturating_mul(self.base_delay_ms)
            .saturating_mul(weight_halves)
            / 2
    }

    pub fn tick_interval_for(&self, index: usize) -> u64 {
        match (index, self.first_tick_interval_ms) {
            (0, Some(first)) => first,
            _ => self.tick_interval_ms,
        }
    }
}

/// Page-level configuration passed into [`crate::PageState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub animator: AnimatorConfig,
    pub title_text: String,
    pub title_tick_interval_ms: u64,
    pub toast_duration_ms: u64,
    pub highlight_duration_ms: u64,
    /// Link copied to the clipboard and attached to social shares.
    pub page_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            animator: AnimatorConfig::default(),
            title_text: "Yes, Hello! Bet!".to_string(),
            title_tick_interval_ms: 100,
            toast_duration_ms: 3000,
            highlight_duration_ms: 1000,
            page_url: "https://yeshello.lol/".to_string(),
        }
    }
}

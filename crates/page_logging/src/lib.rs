#![deny(missing_docs)]
//! Shared logging utilities for the YesHello page workspace.
//!
//! This crate provides the `page_*` logging macros used by the core, engine and
//! app crates, a per-thread virtual clock stamp, and a test initializer for the
//! global logger.

use std::cell::Cell;

thread_local! {
    /// Virtual page time (milliseconds since page load) for the current thread.
    static VIRTUAL_TIME_MS: Cell<u64> = const { Cell::new(0) };
}

/// Records the virtual page time for the current thread.
/// The page runtime calls this every time it advances its timer queue.
pub fn set_virtual_time_ms(now_ms: u64) {
    VIRTUAL_TIME_MS.with(|v| v.set(now_ms));
}

/// Returns the virtual page time for the current thread, or 0 before the first
/// advance.
pub fn virtual_time_ms() -> u64 {
    VIRTUAL_TIME_MS.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the virtual page time.
#[macro_export]
macro_rules! page_trace {
    ($($arg:tt)*) => {{
        log::trace!("[t={}ms] {}", $crate::virtual_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the virtual page time.
#[macro_export]
macro_rules! page_debug {
    ($($arg:tt)*) => {{
        log::debug!("[t={}ms] {}", $crate::virtual_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the virtual page time.
#[macro_export]
macro_rules! page_info {
    ($($arg:tt)*) => {{
        log::info!("[t={}ms] {}", $crate::virtual_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the virtual page time.
#[macro_export]
macro_rules! page_warn {
    ($($arg:tt)*) => {{
        log::warn!("[t={}ms] {}", $crate::virtual_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the virtual page time.
#[macro_export]
macro_rules! page_error {
    ($($arg:tt)*) => {{
        log::error!("[t={}ms] {}", $crate::virtual_time_ms(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

//! Logger setup for the yeshello binary.
//!
//! Frames go to stdout, so terminal logging always uses stderr. The log file is
//! truncated on every start.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    File,
    /// stderr
    Terminal,
    Both,
}

impl LogDestination {
    fn to_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn to_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

/// Verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    /// Adds per-message scheduling and flyout transitions.
    Debug,
    /// Adds every dispatched message and reveal timer.
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LogLevel,
    pub file: PathBuf,
}

pub fn initialize(settings: &LogSettings) {
    let loggers = build_loggers(settings);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(settings: &LogSettings) -> Vec<Box<dyn SharedLogger>> {
    let level = LevelFilter::from(settings.level);
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if settings.destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            page_log_config(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if settings.destination.to_file() {
        if let Some(file_logger) = file_logger(&settings.file, level) {
            loggers.push(file_logger);
        }
    }
    loggers
}

/// Timestamps in RFC 3339. The parser crates behind `scraper` are muted so
/// trace output stays about the page itself.
fn page_log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("html5ever")
        .add_filter_ignore_str("selectors")
        .build()
}

fn file_logger(path: &Path, level: LevelFilter) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, page_log_config(), file)),
        Err(err) => {
            eprintln!("yeshello: not logging to {}: {}", path.display(), err);
            None
        }
    }
}

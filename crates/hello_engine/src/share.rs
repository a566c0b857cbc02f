use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("no share target available")]
    Unavailable,
    #[error("failed to open share url: {0}")]
    Open(String),
}

/// Opens a social share URL (a new browser window on a real page).
pub trait ShareOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), ShareError>;
}

/// Remembers every URL it was asked to open; optionally refuses them all.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
    refuse: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl ShareOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), ShareError> {
        if self.refuse {
            return Err(ShareError::Unavailable);
        }
        let mut urls = self
            .opened
            .lock()
            .map_err(|_| ShareError::Open("opener lock poisoned".into()))?;
        urls.push(url.to_string());
        Ok(())
    }
}

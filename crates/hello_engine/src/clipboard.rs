use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use page_logging::{page_error, page_info};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries `primary`, then `fallback` once. Failures are logged, never raised.
pub fn copy_with_fallback(primary: &dyn Clipboard, fallback: &dyn Clipboard, text: &str) -> bool {
    let err = match primary.write_text(text) {
        Ok(()) => return true,
        Err(err) => err,
    };
    page_error!("Failed to copy: {}", err);

    match fallback.write_text(text) {
        Ok(()) => {
            page_info!("Copied {} bytes through the fallback clipboard", text.len());
            true
        }
        Err(fallback_err) => {
            page_error!("Fallback copy failed: {}", fallback_err);
            false
        }
    }
}

/// In-process clipboard; clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Rejected("clipboard lock poisoned".into()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that always refuses, for hosts without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard on this host".into()))
    }
}

/// Writes the copied text to a file, atomically (temp file then rename), so a
/// reader never sees a half-written link.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            return Err(ClipboardError::Unavailable(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| ClipboardError::Io(e.error))?;
        Ok(())
    }
}

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use hello_engine::{
    Clipboard, ClipboardError, FileClipboard, ShareError, ShareOpener, Services,
    UnavailableClipboard,
};
use page_logging::page_info;

/// System clipboard through a helper program that reads the text on stdin.
#[derive(Debug, Clone)]
pub(crate) struct CommandClipboard {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandClipboard {
    /// Picks the clipboard helper for the current desktop, if any.
    pub(crate) fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            return Some(Self {
                program: "pbcopy",
                args: &[],
            });
        }
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            return Some(Self {
                program: "wl-copy",
                args: &[],
            });
        }
        if std::env::var_os("DISPLAY").is_some() {
            return Some(Self {
                program: "xclip",
                args: &["-selection", "clipboard"],
            });
        }
        None
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ClipboardError::Unavailable(format!("{}: {err}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Rejected(format!("{} exited with {status}", self.program)))
        }
    }
}

/// Prints share links instead of opening a browser window.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PrintOpener;

impl ShareOpener for PrintOpener {
    fn open(&self, url: &str) -> Result<(), ShareError> {
        eprintln!("share: {url}");
        Ok(())
    }
}

pub(crate) fn host_services(clipboard_file: &Path) -> Services {
    let clipboard: Box<dyn Clipboard> = match CommandClipboard::detect() {
        Some(clipboard) => {
            page_info!("Using {} as system clipboard", clipboard.program);
            Box::new(clipboard)
        }
        None => Box::new(UnavailableClipboard),
    };

    Services {
        clipboard,
        fallback_clipboard: Box::new(FileClipboard::new(clipboard_file)),
        opener: Box::new(PrintOpener),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_helper_program_is_unavailable() {
        let clipboard = CommandClipboard {
            program: "yeshello-no-such-clipboard",
            args: &[],
        };
        assert!(matches!(
            clipboard.write_text("https://yeshello.lol/"),
            Err(ClipboardError::Unavailable(_))
        ));
    }

    #[test]
    fn fallback_clipboard_writes_the_configured_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clip.txt");
        let services = host_services(&path);

        services
            .fallback_clipboard
            .write_text("https://yeshello.lol/")
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "https://yeshello.lol/");
        assert!(services.opener.open("https://twitter.com/intent/tweet").is_ok());
    }
}

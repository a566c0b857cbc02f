//! YesHello engine: effect execution, timers, page loading and host services.
mod clipboard;
mod decode;
mod driver;
mod page;
mod runtime;
mod share;
mod timers;

pub use clipboard::{
    copy_with_fallback, Clipboard, ClipboardError, FileClipboard, MemoryClipboard,
    UnavailableClipboard,
};
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use driver::run_realtime;
pub use page::{load_page_file, parse_page, PageLoadError};
pub use runtime::{PageRuntime, Services};
pub use share::{RecordingOpener, ShareError, ShareOpener};
pub use timers::TimerQueue;

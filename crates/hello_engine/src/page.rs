use std::fs;
use std::path::{Path, PathBuf};

use hello_core::{ElementPresence, Message, PageSnapshot, TermSnapshot};
use page_logging::{page_debug, page_info};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::decode::{decode_page, DecodeError};

#[derive(Debug, Error)]
pub enum PageLoadError {
    #[error("failed to read page {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Read, decode and parse a page file.
pub fn load_page_file(
    path: &Path,
    declared_charset: Option<&str>,
) -> Result<PageSnapshot, PageLoadError> {
    let bytes = fs::read(path).map_err(|source| PageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_page(&bytes, declared_charset)?;
    page_info!(
        "loaded page {:?} ({} bytes, {})",
        path,
        bytes.len(),
        decoded.encoding_label
    );
    Ok(parse_page(&decoded.html))
}

/// Collects the elements the page script works with:
/// - `.main-title`, `#secret-emoji`, `#slang-flyout`, `#close-flyout`, `#toast`,
///   `.share-btn.twitter`, `.share-btn.copy` (presence only)
/// - `.good-hello .message` containers, each read from its `p` with an
///   optional `.sender` label
/// - `.term[data-term]` glossary terms
pub fn parse_page(html: &str) -> PageSnapshot {
    let doc = Html::parse_document(html);

    let elements = ElementPresence {
        title: exists(&doc, ".main-title"),
        secret_emoji: exists(&doc, "#secret-emoji"),
        flyout: exists(&doc, "#slang-flyout"),
        close_flyout: exists(&doc, "#close-flyout"),
        toast: exists(&doc, "#toast"),
        share_twitter: exists(&doc, ".share-btn.twitter"),
        share_copy: exists(&doc, ".share-btn.copy"),
    };

    let messages: Vec<Option<Message>> = select_all(&doc, ".good-hello .message")
        .into_iter()
        .map(read_message)
        .collect();

    let terms: Vec<TermSnapshot> = select_all(&doc, ".term[data-term]")
        .into_iter()
        .map(|element| TermSnapshot {
            term: element
                .value()
                .attr("data-term")
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string),
            text: collapsed_text(element),
        })
        .collect();

    page_debug!(
        "parsed page: {} messages ({} usable), {} terms, elements={:?}",
        messages.len(),
        messages.iter().flatten().count(),
        terms.len(),
        elements
    );

    PageSnapshot {
        elements,
        messages,
        terms,
    }
}

fn read_message(container: ElementRef<'_>) -> Option<Message> {
    let paragraph = Selector::parse("p")
        .ok()
        .and_then(|sel| container.select(&sel).next())?;

    let label = Selector::parse(".sender")
        .ok()
        .and_then(|sel| paragraph.select(&sel).next())
        .map(collapsed_text)
        .filter(|label| !label.is_empty());

    let text = collapsed_text(paragraph);
    let body = match label.as_deref() {
        Some(label) => text.replacen(label, "", 1).trim().to_string(),
        None => text,
    };

    Some(Message { label, body })
}

/// Element text with whitespace runs collapsed the way the browser renders it.
fn collapsed_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn exists(doc: &Html, css: &str) -> bool {
    Selector::parse(css)
        .ok()
        .is_some_and(|sel| doc.select(&sel).next().is_some())
}

fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(sel) => doc.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

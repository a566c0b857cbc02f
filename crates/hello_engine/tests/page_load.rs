use std::fs;

use hello_core::{Message, TermSnapshot};
use hello_engine::{load_page_file, parse_page, PageLoadError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const INDEX: &str = include_str!("fixtures/index.html");

#[test]
fn fixture_page_yields_messages_terms_and_elements() {
    page_logging::initialize_for_tests();
    let page = parse_page(INDEX);

    assert!(page.elements.title);
    assert!(page.elements.secret_emoji);
    assert!(page.elements.flyout);
    assert!(page.elements.close_flyout);
    assert!(page.elements.toast);
    assert!(page.elements.share_twitter);
    assert!(page.elements.share_copy);

    assert_eq!(
        page.messages,
        vec![
            Some(Message::labeled("Alex:", "Hello")),
            Some(Message::labeled("Sam:", "hi")),
            None,
            Some(Message::labeled("Alex:", "so... about the tea")),
        ]
    );

    let terms: Vec<(Option<&str>, &str)> = page
        .terms
        .iter()
        .map(|TermSnapshot { term, text }| (term.as_deref(), text.as_str()))
        .collect();
    assert_eq!(
        terms,
        vec![
            (Some("tea"), "tea"),
            (Some("giving"), "giving"),
            (Some("no-cap"), "no cap"),
            (None, "whatever"),
            (Some("yeet"), "yeet"),
        ]
    );
}

#[test]
fn bare_page_has_no_optional_elements() {
    let page = parse_page("<html><body><p>nothing to see</p></body></html>");
    assert!(!page.elements.title);
    assert!(!page.elements.toast);
    assert!(page.messages.is_empty());
    assert!(page.terms.is_empty());
}

#[test]
fn page_file_is_decoded_before_parsing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin1.html");
    fs::write(
        &path,
        b"<div class=\"good-hello\"><div class=\"message\"><p>caf\xe9?</p></div></div>",
    )
    .unwrap();

    let page = load_page_file(&path, Some("iso-8859-1")).unwrap();
    assert_eq!(page.messages, vec![Some(Message::new("café?"))]);
}

#[test]
fn missing_page_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.html");
    let err = load_page_file(&path, None).unwrap_err();
    assert!(matches!(err, PageLoadError::Io { .. }));
    assert!(err.to_string().contains("nope.html"));
}

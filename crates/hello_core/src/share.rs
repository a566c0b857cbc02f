use url::Url;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";

pub const SHARE_PHRASES: [&str; 5] = [
    "This 'Hello' technique is giving power move!",
    "No cap, just say 'Hello' and make them wait.",
    "The way Gen Z texts is actually genius, bestie!",
    "I finally understood the assignment with this Hello method.",
    "This is literally the most iconic texting strat ever.",
];

/// Picks a share phrase; any index is accepted and wrapped onto the table.
pub fn share_phrase(index: usize) -> &'static str {
    SHARE_PHRASES[index % SHARE_PHRASES.len()]
}

/// Builds the tweet intent URL with the phrase and the page link as query
/// parameters.
pub fn twitter_intent_url(phrase: &str, page_url: &str) -> Result<String, url::ParseError> {
    let text = format!("{phrase} Check it:");
    let url = Url::parse_with_params(
        TWITTER_INTENT,
        &[("text", text.as_str()), ("url", page_url)],
    )?;
    Ok(url.into())
}

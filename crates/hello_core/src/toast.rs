pub const LINK_COPIED: &str = "Link copied to clipboard!";
/// What the copy button actually shows on success; it already has its flair.
pub const LINK_COPIED_SLAY: &str = "Link copied to clipboard! Slay!";
pub const COPY_FAILED: &str = "Failed to copy link";
pub const SHARE_FAILED: &str = "Not the vibe... Twitter share failed.";

/// Rewrites the two generic clipboard messages into the page's voice; anything
/// else is shown as given.
pub fn with_flair(message: &str) -> String {
    match message {
        LINK_COPIED => "Link copied! Slay!".to_string(),
        COPY_FAILED => "Not the vibe... copy failed :(".to_string(),
        other => other.to_string(),
    }
}

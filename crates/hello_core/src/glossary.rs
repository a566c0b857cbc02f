use std::collections::BTreeMap;

const BUILTIN_TERMS: &[(&str, &str)] = &[
    ("filler", "A phrase used to fill space in conversation"),
    ("periodt", "Period with a T - emphasizes that a statement is final"),
    ("no-cap", "Not lying, telling the truth"),
    ("tea", "The truth, gossip, or inside information"),
    ("giving", "Resembling or evoking a certain vibe"),
    ("lowkey", "Subtle, understated, or secretly"),
    ("fr", "For real - to emphasize sincerity"),
    ("mad", "Very or extremely"),
    ("why", "Expressing exasperation or disbelief"),
    ("silence", "Strategic pause for effect"),
    ("deadass", "Seriously or genuinely"),
    ("uup", "Checking if someone is awake/online"),
    ("bruh", "Expression of surprise, disbelief, or disappointment"),
    ("yikes", "Expression of shock, embarrassment or disgust"),
    ("cringe", "Awkward, embarrassing or uncomfortable"),
    ("nobody", "Pointing out information wasn't requested"),
    ("bestie", "Term of endearment for friend"),
    ("squad", "Close group of friends"),
    ("sus", "Suspicious or questionable"),
    ("mood", "Relatable or captures a feeling"),
    ("og", "Original gangster - authentic or the first"),
    ("iconic", "Memorable, influential, or impressive"),
    ("bet", "Agreement or confirmation"),
    ("slay", "To do something exceptionally well"),
    ("rizz", "Charm or ability to attract someone"),
    ("bussin", "Really good or amazing"),
    ("main-character", "Acting like you're the protagonist"),
];

/// Slang lookup table keyed by the `data-term` attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glossary {
    entries: BTreeMap<String, String>,
}

impl Default for Glossary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Glossary {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_TERMS.iter().copied())
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(term, description)| (term.into(), description.into()))
                .collect(),
        }
    }

    pub fn describe(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accessible label for a term element: `"<text> - <description>"`, with an
    /// empty description for unknown terms, or just the text when the element
    /// carries no term key.
    pub fn aria_label(&self, text: &str, term: Option<&str>) -> String {
        aria_label(text, term.map(|term| self.describe(term).unwrap_or("")))
    }
}

pub fn aria_label(text: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => format!("{text} - {description}"),
        None => text.to_string(),
    }
}

//! Query text handling.

pub use lesmat_core::normalize_text as normalize;

/// Split a query into normalized words.
///
/// ```
/// use lesmat_search::text::query_words;
///
/// assert_eq!(query_words("  Reizen  in DÜSSELDORF "), vec!["reizen", "in", "dusseldorf"]);
/// assert!(query_words("   ").is_empty());
/// ```
pub fn query_words(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// A parsed free-text query: every word must occur in the searched text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    words: Vec<String>,
}

impl Query {
    /// Parse raw query text.
    pub fn parse(query: &str) -> Self {
        Self {
            words: query_words(query),
        }
    }

    /// Whether the query has no words (and thus matches everything).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The normalized words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether every word is a substring of `normalized_text`.
    ///
    /// The text must already be normalized with [`normalize`].
    pub fn matches(&self, normalized_text: &str) -> bool {
        self.words
            .iter()
            .all(|word| normalized_text.contains(word.as_str()))
    }
}

//! Keyword extraction for the keyword backend.
//!
//! Derives a bounded list of salient terms from free text:
//!
//! 1. Lowercase and split on whitespace
//! 2. Strip leading/trailing punctuation (`. , ! ? ; :`) from each token
//! 3. Drop stopwords (a small, closed English list) and tokens shorter than
//!    three characters
//! 4. Keep first-seen order and cap at ten keywords
//!
//! There is no stemming and no deduplication. A query made only of stopwords
//! yields an empty list, and the keyword backend is then skipped entirely
//! rather than queried with an empty OR.
//!
//! # Example
//!
//! ```rust
//! use glonav_fts::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//!
//! assert_eq!(
//!     extractor.extract("What are the EPA ozone standards?"),
//!     vec!["epa", "ozone", "standards"]
//! );
//! assert!(extractor.extract("the and of").is_empty());
//! ```

use std::collections::HashSet;

/// Maximum number of keywords returned by [`KeywordExtractor::extract`].
pub const MAX_KEYWORDS: usize = 10;

/// Tokens shorter than this (in characters) are dropped.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Punctuation stripped from both ends of each token.
const STRIP_CHARS: &[char] = &['.', ',', '!', '?', ';', ':'];

/// The closed stopword list.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "what", "how", "why", "when", "where", "who", "which",
];

/// Extracts keywords from query text.
pub struct KeywordExtractor {
    stopwords: HashSet<&'static str>,
}

impl KeywordExtractor {
    /// Create an extractor with the built-in stopword list.
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Extract up to [`MAX_KEYWORDS`] keywords, in order of appearance.
    pub fn extract(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|token| token.trim_matches(STRIP_CHARS))
            .filter(|word| !self.is_stopword(word) && word.chars().count() >= MIN_KEYWORD_LEN)
            .take(MAX_KEYWORDS)
            .map(str::to_string)
            .collect()
    }

    /// Check if a word is a stopword (case-insensitive).
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }

    /// Get the number of stopwords in the extractor.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("stopword_count", &self.stopwords.len())
            .field("max_keywords", &MAX_KEYWORDS)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

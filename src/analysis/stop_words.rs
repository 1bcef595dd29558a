//! Stop-word filter implementation.
//!
//! This module provides an immutable set of common words that act as phrase
//! boundaries during n-gram extraction. Stop words are still counted toward
//! unigram statistics; they are only excluded from phrase construction.
//!
//! Membership tests are case-sensitive against already-lowercased input, so
//! custom sets must be populated with lowercase entries.
//!
//! # Examples
//!
//! ```
//! use lexstat::analysis::stop_words::StopWordFilter;
//!
//! let filter = StopWordFilter::new(); // Uses the default stop words
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("linguistics"));
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

/// Default stop word list.
///
/// The 50 most frequent words of the AP89 newswire collection.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "of", "to", "a", "and", "in", "said", "for", "that", "was", "on", "he", "is", "with",
    "at", "by", "it", "from", "as", "be", "were", "an", "have", "his", "but", "has", "are", "not",
    "who", "they", "its", "had", "will", "would", "about", "i", "been", "this", "their", "new",
    "or", "which", "we", "more", "after", "us", "percent", "up", "one", "people",
];

/// Default stop words as a hash set.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<AHashSet<String>> =
    LazyLock::new(|| DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// An immutable set of words excluded from phrase construction.
///
/// Configured once at construction of the processing context. The default
/// list holds the top 50 words of the AP89 dataset; test suites can
/// substitute minimal sets via [`StopWordFilter::from_words`].
///
/// # Examples
///
/// ```
/// use lexstat::analysis::stop_words::StopWordFilter;
///
/// let filter = StopWordFilter::from_words(vec!["the", "on"]);
/// assert_eq!(filter.len(), 2);
/// assert!(filter.is_stop_word("on"));
/// ```
#[derive(Clone, Debug)]
pub struct StopWordFilter {
    /// The set of stop words
    stop_words: Arc<AHashSet<String>>,
}

impl StopWordFilter {
    /// Create a new filter with the default stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a new filter with a custom stop word set.
    ///
    /// Entries are expected to be lowercase, since tokens are lowercased
    /// before filtering.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopWordFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexstat::analysis::stop_words::StopWordFilter;
    ///
    /// let filter = StopWordFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Create a filter with no stop words at all.
    pub fn empty() -> Self {
        Self::with_stop_words(AHashSet::new())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::new()
    }
}

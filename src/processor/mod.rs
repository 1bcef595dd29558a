//! Text processing pipeline for Lexstat.
//!
//! [`TextProcessor`] drives one pass over the tokens of a document: every
//! valid word updates the unigram store, content words accumulate into runs,
//! and each run is flushed through the sliding-window extractor into the
//! configured n-gram stores.
//!
//! # Examples
//!
//! ```
//! use lexstat::processor::TextProcessor;
//!
//! let mut processor = TextProcessor::new();
//! processor.include_ngram(2);
//! processor.process("Colorless green ideas sleep furiously.", true);
//!
//! assert_eq!(processor.num_words(), 5);
//! assert_eq!(processor.num_ngrams(2), 4);
//! ```

pub mod ngram;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::analysis::stop_words::StopWordFilter;
use crate::analysis::tokenizer;
use crate::error::Result;
use crate::frequency::{FrequencyPair, FrequencyStore};

/// Processes text into word and n-gram frequency statistics.
///
/// Only words containing at least two characters are counted. Stop words
/// are counted as unigrams but act as phrase boundaries: no n-gram crosses
/// a stop word or a too-short token.
///
/// N-gram orders are tracked only after [`TextProcessor::include_ngram`];
/// querying an untracked order is not an error and yields empty statistics.
#[derive(Clone, Debug)]
pub struct TextProcessor {
    /// The words and their frequencies
    words: FrequencyStore,
    /// One store per tracked n-gram order
    ngrams: BTreeMap<usize, FrequencyStore>,
    /// Words acting as phrase boundaries
    stop_words: StopWordFilter,
    /// The number of texts that were processed
    documents_processed: u64,
}

impl TextProcessor {
    /// Create a processor with the default stop words and no tracked
    /// n-gram orders.
    pub fn new() -> Self {
        Self::with_stop_words(StopWordFilter::new())
    }

    /// Create a processor with a custom stop-word filter.
    pub fn with_stop_words(stop_words: StopWordFilter) -> Self {
        TextProcessor {
            words: FrequencyStore::new(),
            ngrams: BTreeMap::new(),
            stop_words,
            documents_processed: 0,
        }
    }

    /// Start tracking n-grams of the given order.
    ///
    /// A no-op if the order is already tracked (existing data is kept) or
    /// smaller than two.
    pub fn include_ngram(&mut self, order: usize) {
        if order >= 2 {
            self.ngrams.entry(order).or_default();
        }
    }

    /// Stop tracking n-grams of the given order, dropping its data.
    ///
    /// A no-op if the order is not tracked.
    pub fn exclude_ngram(&mut self, order: usize) {
        self.ngrams.remove(&order);
    }

    /// The tracked n-gram orders, in ascending order.
    pub fn tracked_orders(&self) -> Vec<usize> {
        self.ngrams.keys().copied().collect()
    }

    /// Process the given text into statistics.
    ///
    /// If `append` is false, previously collected word statistics are
    /// cleared first; n-gram stores are never implicitly cleared.
    ///
    /// Increments the processed-document count exactly once, even for an
    /// empty or entirely filtered text.
    pub fn process(&mut self, text: &str, append: bool) {
        if !append {
            self.words.clear();
        }

        let mut run: Vec<String> = Vec::new();
        for word in tokenizer::words(text) {
            if word.chars().count() < 2 {
                // Single letters and apostrophe artifacts are discarded
                // entirely, but still break the phrase window.
                self.flush_run(&mut run);
                continue;
            }

            self.words.increment(&word);

            if self.stop_words.is_stop_word(&word) {
                self.flush_run(&mut run);
                continue;
            }
            run.push(word);
        }
        self.flush_run(&mut run);

        self.documents_processed += 1;
    }

    /// Process the given file into statistics.
    ///
    /// The whole file is read as text; on any read failure an error is
    /// returned and no statistics change. See [`TextProcessor::process`]
    /// for the `append` semantics.
    pub fn process_file<P: AsRef<Path>>(&mut self, path: P, append: bool) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.process(&text, append);
        Ok(())
    }

    /// Flush the current content-word run through the extractor.
    fn flush_run(&mut self, run: &mut Vec<String>) {
        if !run.is_empty() {
            for (&order, store) in self.ngrams.iter_mut() {
                ngram::extract_windows(run, order, store);
            }
        }
        run.clear();
    }

    /// The number of texts that were processed.
    pub fn documents_processed(&self) -> u64 {
        self.documents_processed
    }

    /// The number of valid words.
    pub fn num_words(&self) -> i64 {
        self.words.sum_frequency()
    }

    /// The number of unique valid words.
    pub fn num_unique_words(&self) -> usize {
        self.words.num_unique()
    }

    /// Get the top list of frequent words.
    ///
    /// The list is sorted first by highest frequency and then
    /// alphabetically. A negative `n` returns all of the words.
    pub fn word_frequency(&mut self, n: isize) -> &[FrequencyPair] {
        self.words.top(n)
    }

    /// The number of n-grams of the given order, or zero if untracked.
    pub fn num_ngrams(&self, order: usize) -> i64 {
        self.ngrams
            .get(&order)
            .map_or(0, FrequencyStore::sum_frequency)
    }

    /// The number of unique n-grams of the given order, or zero if
    /// untracked.
    pub fn num_unique_ngrams(&self, order: usize) -> usize {
        self.ngrams.get(&order).map_or(0, FrequencyStore::num_unique)
    }

    /// Get the top list of frequent n-grams of the given order.
    ///
    /// The list is sorted first by highest frequency and then
    /// alphabetically. A negative `n` returns all of the n-grams. An
    /// untracked order yields an empty list.
    pub fn ngram_frequency(&mut self, order: usize, n: isize) -> &[FrequencyPair] {
        match self.ngrams.get_mut(&order) {
            Some(store) => store.top(n),
            None => &[],
        }
    }

    /// Clear the collected word statistics.
    ///
    /// N-gram stores and the processed-document count are deliberately
    /// unaffected, mirroring the clearing done by `process` with
    /// `append == false`.
    pub fn clear_stats(&mut self) {
        self.words.clear();
    }

    /// Clear every collected statistic, word and n-gram alike.
    ///
    /// Tracked orders stay tracked (their stores become empty) and the
    /// processed-document count is unaffected.
    pub fn clear_all(&mut self) {
        self.words.clear();
        for store in self.ngrams.values_mut() {
            store.clear();
        }
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

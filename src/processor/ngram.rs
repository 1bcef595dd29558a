//! Sliding-window n-gram extraction over content-word runs.
//!
//! A run is a maximal uninterrupted sequence of content words between two
//! phrase boundaries (a stop word, a too-short token, or stream start/end).
//! For each tracked order, every contiguous window of that many words is
//! counted as one phrase occurrence.

use crate::frequency::FrequencyStore;

/// Count every contiguous window of `order` consecutive words in the run.
///
/// Each window is joined with a single space to form the phrase key. Runs
/// shorter than `order` produce no phrases.
///
/// # Examples
///
/// ```
/// use lexstat::frequency::FrequencyStore;
/// use lexstat::processor::ngram::extract_windows;
///
/// let run: Vec<String> = ["big", "black", "cat"].map(String::from).into();
/// let mut store = FrequencyStore::new();
/// extract_windows(&run, 2, &mut store);
///
/// assert_eq!(store.get("big black"), 1);
/// assert_eq!(store.get("black cat"), 1);
/// assert_eq!(store.num_unique(), 2);
/// ```
pub fn extract_windows(run: &[String], order: usize, store: &mut FrequencyStore) {
    if order == 0 || run.len() < order {
        return;
    }
    for window in run.windows(order) {
        store.increment(&window.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_bigram_windows() {
        let mut store = FrequencyStore::new();
        extract_windows(&run(&["one", "two", "three"]), 2, &mut store);

        assert_eq!(store.get("one two"), 1);
        assert_eq!(store.get("two three"), 1);
        assert_eq!(store.sum_frequency(), 2);
    }

    #[test]
    fn test_order_equal_to_run_length() {
        let mut store = FrequencyStore::new();
        extract_windows(&run(&["one", "two", "three"]), 3, &mut store);

        assert_eq!(store.get("one two three"), 1);
        assert_eq!(store.num_unique(), 1);
    }

    #[test]
    fn test_run_shorter_than_order() {
        let mut store = FrequencyStore::new();
        extract_windows(&run(&["lonely"]), 2, &mut store);
        extract_windows(&[], 2, &mut store);

        assert!(store.is_empty());
    }

    #[test]
    fn test_repeated_window_accumulates() {
        let mut store = FrequencyStore::new();
        extract_windows(&run(&["ha", "ha", "ha"]), 2, &mut store);

        assert_eq!(store.get("ha ha"), 2);
        assert_eq!(store.num_unique(), 1);
    }
}

//! Frequency store with a lazily rebuilt ranking cache.
//!
//! [`FrequencyStore`] maps string keys to integer counts and memoizes a
//! sorted view of its contents. Every mutation marks the cached ranking
//! dirty; the next ranked query rebuilds it once, so a burst of mutations
//! followed by repeated queries pays the sort cost a single time.
//!
//! # Examples
//!
//! ```
//! use lexstat::frequency::FrequencyStore;
//!
//! let mut store = FrequencyStore::new();
//! store.increment("cat");
//! store.increment("cat");
//! store.increment("mat");
//!
//! assert_eq!(store.sum_frequency(), 3);
//! assert_eq!(store.top(1), [("cat".to_string(), 2)]);
//! ```

use ahash::AHashMap;

/// A key together with its frequency.
pub type FrequencyPair = (String, i64);

/// Keeps track of string frequencies.
///
/// Rankings are sorted first by highest frequency and then alphabetically.
/// A key with count zero still counts as a tracked unique key; only
/// [`FrequencyStore::remove`] (or [`FrequencyStore::clear`]) forgets a key.
#[derive(Clone, Debug, Default)]
pub struct FrequencyStore {
    /// Unsorted frequency data
    counts: AHashMap<String, i64>,
    /// Sorted frequency data, valid only while `dirty` is false
    ranking: Vec<FrequencyPair>,
    /// Whether the ranking must be rebuilt before it is read
    dirty: bool,
}

impl FrequencyStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        FrequencyStore::default()
    }

    /// Set the key's count to exactly `count`.
    ///
    /// No validation is performed; a caller may set a negative count.
    pub fn set<S: Into<String>>(&mut self, key: S, count: i64) {
        self.counts.insert(key.into(), count);
        self.dirty = true;
    }

    /// Increment the key's count by one, inserting it if absent.
    pub fn increment(&mut self, key: &str) {
        self.increment_by(key, 1);
    }

    /// Increment the key's count by `amount`, inserting it if absent.
    ///
    /// Equivalent to `set(key, get(key) + amount)`.
    pub fn increment_by(&mut self, key: &str, amount: i64) {
        match self.counts.get_mut(key) {
            Some(count) => *count += amount,
            None => {
                self.counts.insert(key.to_string(), amount);
            }
        }
        self.dirty = true;
    }

    /// Get the key's count, or zero if the key is not tracked.
    ///
    /// Does not insert the key.
    pub fn get(&self, key: &str) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Check whether the key is tracked (even with a zero count).
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Remove the key entirely. A no-op if the key is not tracked.
    pub fn remove(&mut self, key: &str) {
        if self.counts.remove(key).is_some() {
            self.dirty = true;
        }
    }

    /// Clear all keys and the ranking cache, resetting to empty and clean.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.ranking.clear();
        self.dirty = false;
    }

    /// The number of unique keys.
    pub fn num_unique(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the store tracks no keys.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The sum of all the frequencies.
    ///
    /// Recomputed on demand, never cached.
    pub fn sum_frequency(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Get the top list of frequent keys.
    ///
    /// The list is sorted first by highest frequency and then
    /// alphabetically. If `n` is negative or exceeds the number of tracked
    /// keys, all of them are returned.
    ///
    /// Rebuilds the ranking cache if any mutation occurred since the last
    /// ranked query; otherwise the cached ordering is reused as is.
    pub fn top(&mut self, n: isize) -> &[FrequencyPair] {
        if self.dirty {
            self.ranking = self
                .counts
                .iter()
                .map(|(key, &count)| (key.clone(), count))
                .collect();
            self.ranking
                .sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            self.dirty = false;
        }

        let len = self.ranking.len();
        let n = if n < 0 || n as usize > len {
            len
        } else {
            n as usize
        };
        &self.ranking[..n]
    }

    /// Get the full ranking, equivalent to `top(-1)`.
    pub fn ranked(&mut self) -> &[FrequencyPair] {
        self.top(-1)
    }
}

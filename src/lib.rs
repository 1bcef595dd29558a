//! # Lexstat
//!
//! Word and n-gram frequency statistics for text corpora.
//!
//! ## Features
//!
//! - Word tokenization with contraction handling ("don't", "parents'")
//! - Unigram counts with lazily sorted top-N rankings
//! - Configurable n-gram orders with stop-word phrase boundaries
//! - Ranked lists ordered by count descending, then key ascending
//!
//! ## Example
//!
//! ```
//! use lexstat::analysis::stop_words::StopWordFilter;
//! use lexstat::processor::TextProcessor;
//!
//! let mut processor = TextProcessor::with_stop_words(
//!     StopWordFilter::from_words(vec!["the", "on"]),
//! );
//! processor.include_ngram(2);
//! processor.process("the cat sat on the mat", true);
//!
//! assert_eq!(processor.num_words(), 6);
//! assert_eq!(processor.ngram_frequency(2, -1), [("cat sat".to_string(), 1)]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod processor;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::stop_words::StopWordFilter;
    pub use crate::error::{LexstatError, Result};
    pub use crate::frequency::{FrequencyPair, FrequencyStore};
    pub use crate::processor::TextProcessor;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

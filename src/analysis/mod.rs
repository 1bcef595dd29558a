//! Text analysis module for Lexstat.
//!
//! This module provides the tokenization and stop-word filtering that feed
//! the frequency statistics pipeline.

pub mod stop_words;
pub mod tokenizer;

// Re-export commonly used types
pub use stop_words::*;
pub use tokenizer::*;

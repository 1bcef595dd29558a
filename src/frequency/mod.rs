//! Frequency counting for Lexstat.
//!
//! This module provides [`FrequencyStore`], a string-to-count mapping with a
//! lazily rebuilt ranking cache.

pub mod store;

// Re-export commonly used types
pub use store::*;

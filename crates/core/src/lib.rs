//! Secwe-core - Core Secwépemctsín text algorithms
//!
//! This crate provides the fundamental data structures and algorithms for
//! working with Secwépemctsín text: the alphabet table, the greedy grapheme
//! tokenizer, the collator, and the confusable normalizer.
//!
//! # Features
//!
//! - Alphabet storage with `AHashMap` rank lookup and compact strings
//! - Greedy longest-match tokenization over multi-scalar graphemes
//! - Stable alphabet-order sorting with precomputed keys
//! - Confusable cleanup with guaranteed idempotence
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use secwe_core::{Alphabet, AlphabetEntry, Collator};
//! use std::sync::Arc;
//!
//! let alphabet = Alphabet::new(vec![
//!     AlphabetEntry::new("a", 0),
//!     AlphabetEntry::new("kw", 1),
//!     AlphabetEntry::new("k", 2),
//! ])?;
//!
//! let collator = Collator::new(Arc::new(alphabet));
//! assert!(collator.compare("kwa", "ka").is_lt());
//! # Ok::<(), secwe_core::EngineError>(())
//! ```

pub mod error;
pub use error::{EngineError, Result};

// Alphabet table and rank lookup
pub mod alphabet;
pub use alphabet::{Alphabet, AlphabetEntry, Rank, RankTable};

// Greedy grapheme tokenization
pub mod tokenize;
pub use tokenize::GraphemeTokenizer;

// Comparison and sorting
pub mod collate;
pub use collate::{Collator, SortKey};

// Confusable cleanup
pub mod confusables;
pub use confusables::{ConfusableMatch, ConfusablesTable};

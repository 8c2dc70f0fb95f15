//! Secwe-text - High-level Secwépemctsín text engine
//!
//! This crate provides a user-friendly interface for Secwépemctsín text
//! processing, integrating all components (alphabet table, collator,
//! confusable normalizer) into a single, easy-to-use API.
//!
//! # Features
//!
//! - Bundled alphabet and confusables tables, compiled into the binary
//! - Loading replacement tables from JSON files
//! - Alphabet-order sorting with parallel key computation
//! - Confusable cleanup and data-quality reports
//!
//! # Example
//!
//! ```rust
//! use secwe_text::TextEngine;
//!
//! let engine = TextEngine::bundled()?;
//!
//! // Sort in alphabet order, not code point order
//! let words = vec!["ts\u{0313}i7".to_string(), "kúkwpi7".to_string()];
//! let sorted = engine.sort_words(words);
//! assert_eq!(sorted[0], "kúkwpi7");
//!
//! // Clean up keyboard apostrophes
//! assert_eq!(engine.normalize("c'a"), "c\u{0313}a");
//! # Ok::<(), secwe_text::EngineError>(())
//! ```

// Re-export core types
pub use secwe_core::{
    Alphabet, AlphabetEntry, Collator, ConfusableMatch, ConfusablesTable, EngineError,
    GraphemeTokenizer, Rank, Result, SortKey,
};

// Engine API
pub mod engine;
pub use engine::{TextEngine, TextEngineBuilder, UnknownGrapheme};

// IO/Serialization
pub mod io;
pub use io::{AlphabetRecord, ConfusablesMap, TableLoader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Main text engine implementation.
//!
//! This module provides the high-level `TextEngine` struct that integrates
//! the alphabet table, the collator, and the confusable normalizer.

use crate::io::load::TableLoader;
use compact_str::CompactString;
use rayon::prelude::*;
use secwe_core::{
    Alphabet, Collator, ConfusableMatch, ConfusablesTable, Result, SortKey,
};
use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Bundled default tables: the published alphabet order and the confusable
/// cleanups used by the word-list tooling.
const BUNDLED_ALPHABET: &str = include_str!("../../data/alphabet.json");
const BUNDLED_CONFUSABLES: &str = include_str!("../../data/confusables.json");

/// A grapheme in a word that is not part of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownGrapheme {
    /// The unknown text as found
    pub grapheme: CompactString,
    /// Byte offset in the word
    pub position: usize,
}

/// Builder for creating a text engine with overridden tables.
///
/// Tables given as values win over file paths; anything not set falls back
/// to the bundled data.
#[derive(Default)]
pub struct TextEngineBuilder {
    alphabet: Option<Alphabet>,
    confusables: Option<ConfusablesTable>,
    alphabet_path: Option<PathBuf>,
    confusables_path: Option<PathBuf>,
}

impl TextEngineBuilder {
    /// Create a new builder using the bundled tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-built alphabet table.
    pub fn alphabet(mut self, table: Alphabet) -> Self {
        self.alphabet = Some(table);
        self
    }

    /// Load the alphabet from a JSON file at build time.
    pub fn alphabet_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.alphabet_path = Some(path.into());
        self
    }

    /// Use an already-built confusables table.
    pub fn confusables(mut self, table: ConfusablesTable) -> Self {
        self.confusables = Some(table);
        self
    }

    /// Load the confusables from a JSON file at build time.
    pub fn confusables_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.confusables_path = Some(path.into());
        self
    }

    /// Load both tables from a directory containing the standard file names.
    pub fn tables_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.alphabet_path = Some(dir.join(crate::io::load::ALPHABET_FILE));
        self.confusables_path = Some(dir.join(crate::io::load::CONFUSABLES_FILE));
        self
    }

    /// Build the engine, loading and validating any file-backed tables.
    pub fn build(self) -> Result<TextEngine> {
        let alphabet = match (self.alphabet, self.alphabet_path) {
            (Some(table), _) => table,
            (None, Some(path)) => TableLoader::load_alphabet(&path)?,
            (None, None) => TableLoader::parse_alphabet(BUNDLED_ALPHABET)?,
        };
        let confusables = match (self.confusables, self.confusables_path) {
            (Some(table), _) => table,
            (None, Some(path)) => TableLoader::load_confusables(&path)?,
            (None, None) => TableLoader::parse_confusables(BUNDLED_CONFUSABLES)?,
        };
        Ok(TextEngine::new(alphabet, confusables))
    }
}

/// Main text engine.
///
/// This is the high-level API that integrates the alphabet table, collator,
/// and confusable normalizer into a single interface. The engine is immutable
/// and `Send + Sync`, so one instance can serve all threads.
pub struct TextEngine {
    /// Alphabet table
    alphabet: Arc<Alphabet>,
    /// Confusable substitution table
    confusables: Arc<ConfusablesTable>,
    /// Collator over the alphabet
    collator: Collator,
}

impl TextEngine {
    /// Create an engine from already-validated tables.
    pub fn new(alphabet: Alphabet, confusables: ConfusablesTable) -> Self {
        let alphabet = Arc::new(alphabet);
        let collator = Collator::new(alphabet.clone());
        Self {
            alphabet,
            confusables: Arc::new(confusables),
            collator,
        }
    }

    /// Engine over the bundled default tables.
    pub fn bundled() -> Result<Self> {
        let alphabet = TableLoader::parse_alphabet(BUNDLED_ALPHABET)?;
        let confusables = TableLoader::parse_confusables(BUNDLED_CONFUSABLES)?;
        Ok(Self::new(alphabet, confusables))
    }

    /// Load both tables from a directory.
    ///
    /// Expects `alphabet.json` and `confusables.json` in the given directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let (alphabet, confusables) = TableLoader::load_dir(dir)?;
        Ok(Self::new(alphabet, confusables))
    }

    /// Create a builder for an engine with overridden tables.
    pub fn builder() -> TextEngineBuilder {
        TextEngineBuilder::new()
    }

    // --- Collation ---

    /// Compare two words in alphabet order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Stable sort of `items` in the alphabet order of `key_fn(item)`.
    pub fn sort<T, K, F>(&self, items: Vec<T>, key_fn: F) -> Vec<T>
    where
        K: AsRef<str>,
        F: Fn(&T) -> K,
    {
        self.collator.sort(items, key_fn)
    }

    /// Sort a word list in alphabet order.
    ///
    /// Collation keys are computed in parallel; the final ordering is a
    /// stable sort, so equal words keep their input order.
    pub fn sort_words(&self, words: Vec<String>) -> Vec<String> {
        let mut decorated: Vec<(SortKey, String)> = words
            .into_par_iter()
            .map(|word| (self.collator.sort_key(&word), word))
            .collect();
        decorated.sort_by(|a, b| a.0.cmp(&b.0));
        decorated.into_iter().map(|(_, word)| word).collect()
    }

    /// Split a word into its grapheme tokens.
    pub fn tokenize(&self, word: &str) -> Vec<String> {
        self.collator
            .tokenizer()
            .tokenize(word)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// First grapheme of a word, `""` for empty input.
    pub fn first_grapheme(&self, word: &str) -> String {
        self.collator.first_grapheme(word).to_owned()
    }

    /// Alphabet characters in canonical order.
    pub fn canonical_alphabet(&self) -> Vec<String> {
        self.collator.canonical_alphabet()
    }

    // --- Normalization ---

    /// Rewrite confusable substrings to their canonical forms.
    pub fn normalize(&self, text: &str) -> String {
        self.confusables.normalize(text)
    }

    /// Whether the text contains any confusable substring.
    pub fn has_confusables(&self, text: &str) -> bool {
        self.confusables.has_confusables(text)
    }

    /// Every confusable occurrence in the text, sorted by byte position.
    pub fn find_confusables(&self, text: &str) -> Vec<ConfusableMatch> {
        self.confusables.find_confusables(text)
    }

    /// Number of substitution pairs in the confusables table.
    pub fn confusable_count(&self) -> usize {
        self.confusables.len()
    }

    // --- Diagnostics ---

    /// Graphemes of `word` that are outside the alphabet, with byte offsets.
    ///
    /// Reports every fallback token the tokenizer produced, including
    /// whitespace and punctuation; callers decide what counts as a problem.
    pub fn find_unknown(&self, word: &str) -> Vec<UnknownGrapheme> {
        let mut found = Vec::new();
        let mut pos = 0;
        for token in self.collator.tokenizer().tokenize(word) {
            if !self.alphabet.contains(token) {
                found.push(UnknownGrapheme {
                    grapheme: CompactString::new(token),
                    position: pos,
                });
            }
            pos += token.len();
        }
        found
    }

    // --- Table access ---

    /// Shared alphabet handle.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Shared confusables handle.
    pub fn confusables(&self) -> &Arc<ConfusablesTable> {
        &self.confusables
    }

    /// The collator backing this engine.
    pub fn collator(&self) -> &Collator {
        &self.collator
    }
}

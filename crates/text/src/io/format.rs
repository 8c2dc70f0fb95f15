//! Format definitions for the table files.
//!
//! This module defines the data structures for the two JSON files the
//! engine is built from: the alphabet ordering and the confusable
//! substitutions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single alphabet file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetRecord {
    /// The grapheme exactly as written in the orthography
    pub character: String,
    /// Canonical position, ascending
    pub rank: u32,
}

/// The alphabet file: an array of records, conventionally ordered by rank.
pub type AlphabetRecords = Vec<AlphabetRecord>;

/// The confusables file: confusable substring to canonical substring.
///
/// A `BTreeMap` so the file round-trips with stable key order; the table
/// applies its own replacement order regardless.
pub type ConfusablesMap = BTreeMap<String, String>;

//! Confusable-substring normalization.
//!
//! Keyboards and copy-paste introduce characters that look like the
//! orthography but are not it: plain apostrophes standing in for U+0313,
//! the IPA glottal stop for `7`, combining accents for precomposed vowels.
//! This module rewrites such substrings to their canonical forms and reports
//! occurrences for data-quality tooling.

use crate::error::{EngineError, Result};
use compact_str::CompactString;
use serde::Serialize;

/// One confusable occurrence found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusableMatch {
    /// The confusable substring as found
    pub found: CompactString,
    /// Its canonical replacement
    pub canonical: CompactString,
    /// Byte offset of the occurrence
    pub position: usize,
}

/// Immutable confusable-to-canonical substitution table.
///
/// Replacement runs longest key first so that multi-scalar confusables are
/// rewritten before any of their pieces. No canonical form may contain a
/// confusable key, nor combine with neighboring text into one (no form
/// suffix starts a key, no form prefix ends a key, no form sits strictly
/// inside a key), which keeps [`normalize`](Self::normalize) idempotent.
#[derive(Debug, Clone)]
pub struct ConfusablesTable {
    /// Pairs ordered longest key first, then key ascending
    pairs: Vec<(CompactString, CompactString)>,
}

impl ConfusablesTable {
    /// Build and validate a substitution table.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfusables` for empty keys, empty
    /// canonical forms, duplicate keys, identity mappings, or canonical
    /// forms that contain another confusable key or could recombine with
    /// surrounding text into one.
    pub fn new<K, V, I>(mappings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: Vec<(CompactString, CompactString)> = Vec::new();
        for (key, value) in mappings {
            let key = CompactString::new(key.as_ref());
            let value = CompactString::new(value.as_ref());
            if key.is_empty() {
                return Err(EngineError::InvalidConfusables(
                    "empty confusable key".to_string(),
                ));
            }
            if value.is_empty() {
                return Err(EngineError::InvalidConfusables(format!(
                    "empty canonical form for {:?}",
                    key.as_str()
                )));
            }
            if key == value {
                return Err(EngineError::InvalidConfusables(format!(
                    "{:?} maps to itself",
                    key.as_str()
                )));
            }
            if pairs.iter().any(|(existing, _)| *existing == key) {
                return Err(EngineError::InvalidConfusables(format!(
                    "duplicate confusable key {:?}",
                    key.as_str()
                )));
            }
            pairs.push((key, value));
        }

        // A canonical form that contains a key, or that can combine with
        // the text around a replacement into one, would be rewritten again
        // on the next pass, breaking idempotence.
        for (key, value) in &pairs {
            for (other, _) in &pairs {
                if let Some(how) = composition_hazard(value, other) {
                    return Err(EngineError::InvalidConfusables(format!(
                        "canonical form {:?} for {:?} {} confusable {:?}",
                        value.as_str(),
                        key.as_str(),
                        how,
                        other.as_str()
                    )));
                }
            }
        }

        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Ok(Self { pairs })
    }

    /// Rewrite every confusable occurrence to its canonical form.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (from, to) in &self.pairs {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }

    /// Whether the text contains any confusable substring.
    pub fn has_confusables(&self, text: &str) -> bool {
        self.pairs
            .iter()
            .any(|(from, _)| text.contains(from.as_str()))
    }

    /// Every confusable occurrence in the text, sorted by byte position.
    ///
    /// The scan advances one scalar value after each hit, so overlapping
    /// occurrences of a self-overlapping key are all reported.
    pub fn find_confusables(&self, text: &str) -> Vec<ConfusableMatch> {
        let mut matches = Vec::new();
        for (from, to) in &self.pairs {
            let mut start = 0;
            while let Some(found) = text[start..].find(from.as_str()) {
                let position = start + found;
                matches.push(ConfusableMatch {
                    found: from.clone(),
                    canonical: to.clone(),
                    position,
                });
                let step = text[position..].chars().next().map_or(1, char::len_utf8);
                start = position + step;
            }
        }
        matches.sort_by_key(|m| m.position);
        matches
    }

    /// Pairs in replacement order (longest key first).
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Number of substitution pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// How splicing `value` into text could produce a fresh occurrence of
/// `key`, if it can: by containing it outright, by supplying its head or
/// tail across the seam, or by sitting strictly inside it.
fn composition_hazard(value: &str, key: &str) -> Option<&'static str> {
    if value.contains(key) {
        return Some("contains");
    }
    if char_suffixes(value).any(|s| key.len() > s.len() && key.starts_with(s)) {
        return Some("can start");
    }
    if char_prefixes(value).any(|p| key.len() > p.len() && key.ends_with(p)) {
        return Some("can end");
    }
    if key
        .match_indices(value)
        .any(|(at, _)| at > 0 && at + value.len() < key.len())
    {
        return Some("can sit inside");
    }
    None
}

/// Nonempty suffixes of `s` starting at character boundaries.
fn char_suffixes(s: &str) -> impl Iterator<Item = &str> + '_ {
    s.char_indices().map(|(i, _)| &s[i..])
}

/// Nonempty prefixes of `s` ending at character boundaries.
fn char_prefixes(s: &str) -> impl Iterator<Item = &str> + '_ {
    s.char_indices().map(|(i, ch)| &s[..i + ch.len_utf8()])
}

//! Alphabet table storage and rank lookup.
//!
//! The alphabet is an ordered list of graphemes, where a grapheme is one or
//! more Unicode scalar values written as a single letter of the orthography
//! (`kw`, `ts̓`, `7`). Ranks give the canonical position of each grapheme and
//! drive both collation and greedy matching.

use crate::error::{EngineError, Result};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Position of a grapheme in canonical alphabetical order.
pub type Rank = u32;

/// Rank lookup table mapping grapheme strings to ranks.
pub type RankTable = AHashMap<CompactString, Rank>;

/// Base added to the first scalar value of graphemes outside the alphabet.
/// Raised when the table itself uses ranks at or above it.
const UNKNOWN_RANK_BASE: u32 = 1000;

/// A single alphabet entry: one grapheme and its canonical position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetEntry {
    /// The grapheme exactly as written in the orthography
    pub character: CompactString,
    /// Canonical position, ascending
    pub rank: Rank,
}

impl AlphabetEntry {
    /// Create a new entry.
    pub fn new(character: impl Into<CompactString>, rank: Rank) -> Self {
        Self {
            character: character.into(),
            rank,
        }
    }
}

/// Candidate prepared for greedy matching.
#[derive(Debug, Clone)]
pub(crate) struct MatchCandidate {
    /// Lowercased grapheme text compared against input prefixes
    pub(crate) lower: CompactString,
    /// Grapheme length in scalar values
    pub(crate) scalars: usize,
}

/// The alphabet table: canonical grapheme order plus rank lookup.
///
/// Built once from an entry list, validated, and immutable afterwards.
/// Wrap in an `Arc` to share across tokenizers and threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Entries in canonical order (rank ascending)
    entries: Vec<AlphabetEntry>,
    /// Rank lookup keyed by each grapheme as given plus its lowercase form
    ranks: RankTable,
    /// Match candidates ordered longest first, then rank ascending
    candidates: Vec<MatchCandidate>,
    /// Base rank assigned to graphemes outside the alphabet
    unknown_offset: u32,
}

impl Alphabet {
    /// Build an alphabet from entries, validating as it goes.
    ///
    /// # Arguments
    /// * `entries` - Graphemes with their canonical positions, in any order
    ///
    /// # Errors
    /// Returns `EngineError::InvalidAlphabet` for empty graphemes, duplicate
    /// graphemes, or duplicate ranks.
    pub fn new(mut entries: Vec<AlphabetEntry>) -> Result<Self> {
        let mut ranks = RankTable::with_capacity(entries.len() * 2);
        let mut seen_ranks = AHashMap::with_capacity(entries.len());

        for entry in &entries {
            if entry.character.is_empty() {
                return Err(EngineError::InvalidAlphabet(format!(
                    "empty grapheme at rank {}",
                    entry.rank
                )));
            }
            if ranks.insert(entry.character.clone(), entry.rank).is_some() {
                return Err(EngineError::InvalidAlphabet(format!(
                    "duplicate grapheme {:?}",
                    entry.character.as_str()
                )));
            }
            if let Some(other) = seen_ranks.insert(entry.rank, entry.character.clone()) {
                return Err(EngineError::InvalidAlphabet(format!(
                    "rank {} assigned to both {:?} and {:?}",
                    entry.rank,
                    other.as_str(),
                    entry.character.as_str()
                )));
            }
        }

        entries.sort_by_key(|entry| entry.rank);

        // Lowercase aliases for case-insensitive lookup. An explicit entry
        // always wins over an alias; among entries sharing a lowercase form
        // the lowest rank provides the alias.
        for entry in &entries {
            let lower: CompactString = entry.character.chars().flat_map(char::to_lowercase).collect();
            ranks.entry(lower).or_insert(entry.rank);
        }

        // Greedy matching wants the longest grapheme first; among equal
        // lengths the lower rank is tried first.
        let mut candidates: Vec<MatchCandidate> = entries
            .iter()
            .map(|entry| MatchCandidate {
                lower: entry.character.chars().flat_map(char::to_lowercase).collect(),
                scalars: entry.character.chars().count(),
            })
            .collect();
        candidates.sort_by(|a, b| b.scalars.cmp(&a.scalars));

        let unknown_offset = entries
            .iter()
            .map(|entry| entry.rank)
            .max()
            .map_or(UNKNOWN_RANK_BASE, |max| {
                UNKNOWN_RANK_BASE.max(max.saturating_add(1))
            });

        Ok(Self {
            entries,
            ranks,
            candidates,
            unknown_offset,
        })
    }

    /// Rank of a grapheme.
    ///
    /// Lookup is exact first, then against the lowercased grapheme. Graphemes
    /// outside the alphabet get `unknown_offset` plus their first scalar
    /// value, so unknown input still sorts deterministically after every
    /// alphabet letter.
    pub fn rank_of(&self, grapheme: &str) -> Rank {
        if let Some(&rank) = self.ranks.get(grapheme) {
            return rank;
        }
        let lower: CompactString = grapheme.chars().flat_map(char::to_lowercase).collect();
        if let Some(&rank) = self.ranks.get(lower.as_str()) {
            return rank;
        }
        let first = grapheme.chars().next().map_or(0, |ch| ch as u32);
        self.unknown_offset.saturating_add(first)
    }

    /// Whether a grapheme is part of the alphabet (case-insensitive).
    pub fn contains(&self, grapheme: &str) -> bool {
        if self.ranks.contains_key(grapheme) {
            return true;
        }
        let lower: CompactString = grapheme.chars().flat_map(char::to_lowercase).collect();
        self.ranks.contains_key(lower.as_str())
    }

    /// Graphemes in canonical order.
    pub fn characters(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.character.as_str())
    }

    /// Entries in canonical order.
    #[inline]
    pub fn entries(&self) -> &[AlphabetEntry] {
        &self.entries
    }

    /// Number of graphemes in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the alphabet has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Base rank assigned to graphemes outside the alphabet.
    #[inline]
    pub fn unknown_offset(&self) -> u32 {
        self.unknown_offset
    }

    /// Match candidates, longest first.
    #[inline]
    pub(crate) fn candidates(&self) -> &[MatchCandidate] {
        &self.candidates
    }
}

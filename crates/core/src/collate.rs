//! Alphabet-order comparison and sorting.
//!
//! Words are compared by their grapheme rank sequences: the first unequal
//! rank decides, and when one sequence is a prefix of the other the shorter
//! word sorts first. Sorting is stable, so equal words keep their input
//! order.

use crate::alphabet::{Alphabet, Rank};
use crate::tokenize::GraphemeTokenizer;
use std::cmp::Ordering;
use std::sync::Arc;

/// Precomputed collation key: the rank sequence of a word.
///
/// Keys order lexicographically over ranks, which agrees with
/// [`Collator::compare`] on the underlying words.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<Rank>);

impl SortKey {
    /// The ranks making up the key.
    #[inline]
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

/// Three-way word comparison and sorting in alphabet order.
pub struct Collator {
    /// Alphabet supplying the ranks
    alphabet: Arc<Alphabet>,
    /// Tokenizer over the same alphabet
    tokenizer: GraphemeTokenizer,
}

impl Collator {
    /// Create a collator for the given alphabet.
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        let tokenizer = GraphemeTokenizer::new(alphabet.clone());
        Self {
            alphabet,
            tokenizer,
        }
    }

    /// Compare two words grapheme rank by grapheme rank.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let tokens_a = self.tokenizer.tokenize(a);
        let tokens_b = self.tokenizer.tokenize(b);
        for (ga, gb) in tokens_a.iter().zip(tokens_b.iter()) {
            let ordering = self.alphabet.rank_of(ga).cmp(&self.alphabet.rank_of(gb));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        tokens_a.len().cmp(&tokens_b.len())
    }

    /// Precompute the collation key for a word.
    ///
    /// Tokenizes once; use this instead of repeated [`compare`](Self::compare)
    /// calls when sorting large lists.
    pub fn sort_key(&self, word: &str) -> SortKey {
        SortKey(
            self.tokenizer
                .tokenize(word)
                .iter()
                .map(|grapheme| self.alphabet.rank_of(grapheme))
                .collect(),
        )
    }

    /// Stable sort of `items` in the alphabet order of `key_fn(item)`.
    ///
    /// Each item's key is tokenized exactly once.
    pub fn sort<T, K, F>(&self, items: Vec<T>, key_fn: F) -> Vec<T>
    where
        K: AsRef<str>,
        F: Fn(&T) -> K,
    {
        let mut decorated: Vec<(SortKey, T)> = items
            .into_iter()
            .map(|item| (self.sort_key(key_fn(&item).as_ref()), item))
            .collect();
        decorated.sort_by(|a, b| a.0.cmp(&b.0));
        decorated.into_iter().map(|(_, item)| item).collect()
    }

    /// First grapheme of a word, `""` for empty input.
    pub fn first_grapheme<'a>(&self, word: &'a str) -> &'a str {
        self.tokenizer.first_grapheme(word)
    }

    /// Alphabet characters in canonical order.
    pub fn canonical_alphabet(&self) -> Vec<String> {
        self.alphabet.characters().map(str::to_owned).collect()
    }

    /// Shared alphabet handle.
    #[inline]
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// The tokenizer backing this collator.
    #[inline]
    pub fn tokenizer(&self) -> &GraphemeTokenizer {
        &self.tokenizer
    }
}

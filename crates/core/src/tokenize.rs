//! Greedy longest-match grapheme tokenization.
//!
//! Splits a word into alphabet graphemes by maximal munch: at each position
//! the longest candidate that matches the input case-insensitively is taken.
//! Anything the alphabet does not cover falls back to a single scalar value,
//! so every input tokenizes and the tokens always concatenate back to it.

use crate::alphabet::Alphabet;
use std::sync::Arc;

/// Grapheme tokenizer over a shared alphabet table.
pub struct GraphemeTokenizer {
    /// Alphabet supplying the match candidates
    alphabet: Arc<Alphabet>,
}

impl GraphemeTokenizer {
    /// Create a tokenizer for the given alphabet.
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    /// Split a word into grapheme tokens.
    ///
    /// Tokens are subslices of the input, so the original casing is kept
    /// even though matching ignores case.
    pub fn tokenize<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < word.len() {
            let end = pos + self.next_token_len(&word[pos..]);
            tokens.push(&word[pos..end]);
            pos = end;
        }
        tokens
    }

    /// First grapheme of a word, `""` for empty input.
    pub fn first_grapheme<'a>(&self, word: &'a str) -> &'a str {
        if word.is_empty() {
            return "";
        }
        &word[..self.next_token_len(word)]
    }

    /// Shared alphabet handle.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Byte length of the token starting at the front of `rest`.
    ///
    /// `rest` must be non-empty; the result is always at least one byte.
    fn next_token_len(&self, rest: &str) -> usize {
        let matched = self.alphabet.candidates().iter().find_map(|cand| {
            let end = prefix_len(rest, cand.scalars)?;
            eq_lowered(&rest[..end], &cand.lower).then_some(end)
        });
        match matched {
            Some(end) => end,
            None => rest.chars().next().map_or(1, char::len_utf8),
        }
    }
}

/// Byte length of the first `scalars` scalar values of `s`, or `None` if `s`
/// has fewer.
fn prefix_len(s: &str, scalars: usize) -> Option<usize> {
    let mut seen = 0;
    for (idx, ch) in s.char_indices() {
        seen += 1;
        if seen == scalars {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

/// Case-insensitive equality between an input prefix and a pre-lowercased
/// candidate.
fn eq_lowered(prefix: &str, lower: &str) -> bool {
    prefix.chars().flat_map(char::to_lowercase).eq(lower.chars())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::AlphabetEntry;

    fn tokenizer(entries: Vec<AlphabetEntry>) -> GraphemeTokenizer {
        GraphemeTokenizer::new(Arc::new(Alphabet::new(entries).unwrap()))
    }

    fn sample() -> GraphemeTokenizer {
        tokenizer(vec![
            AlphabetEntry::new("a", 0),
            AlphabetEntry::new("b", 1),
            AlphabetEntry::new("kw", 2),
            AlphabetEntry::new("k", 3),
        ])
    }

    #[test]
    fn test_longest_match_wins() {
        let tok = sample();
        assert_eq!(tok.tokenize("kwa"), vec!["kw", "a"]);
        assert_eq!(tok.tokenize("ka"), vec!["k", "a"]);
        assert_eq!(tok.tokenize("kab"), vec!["k", "a", "b"]);
    }

    #[test]
    fn test_case_preserved_in_tokens() {
        let tok = sample();
        assert_eq!(tok.tokenize("KWA"), vec!["KW", "A"]);
        assert_eq!(tok.tokenize("Kwa"), vec!["Kw", "a"]);
    }

    #[test]
    fn test_unknown_falls_back_to_scalar() {
        let tok = sample();
        assert_eq!(tok.tokenize("kza"), vec!["k", "z", "a"]);
        assert_eq!(tok.tokenize("zz"), vec!["z", "z"]);
    }

    #[test]
    fn test_multi_scalar_grapheme() {
        let tok = tokenizer(vec![
            AlphabetEntry::new("c", 0),
            AlphabetEntry::new("c\u{0313}", 1),
            AlphabetEntry::new("a", 2),
        ]);
        assert_eq!(tok.tokenize("c\u{0313}a"), vec!["c\u{0313}", "a"]);
        assert_eq!(tok.tokenize("ca"), vec!["c", "a"]);
        // Orphaned combining mark falls back to a single scalar
        assert_eq!(tok.tokenize("a\u{0313}"), vec!["a", "\u{0313}"]);
    }

    #[test]
    fn test_empty_input() {
        let tok = sample();
        assert!(tok.tokenize("").is_empty());
        assert_eq!(tok.first_grapheme(""), "");
    }

    #[test]
    fn test_first_grapheme() {
        let tok = sample();
        assert_eq!(tok.first_grapheme("kwa"), "kw");
        assert_eq!(tok.first_grapheme("ka"), "k");
        assert_eq!(tok.first_grapheme("za"), "z");
    }

    #[test]
    fn test_tokens_concatenate_to_input() {
        let tok = sample();
        for word in ["kwakb", "KWA", "zzz", "k", "", "a\u{0313}kw"] {
            let joined: String = tok.tokenize(word).concat();
            assert_eq!(joined, word);
        }
    }

    #[test]
    fn test_empty_alphabet_scalar_fallback() {
        let tok = tokenizer(vec![]);
        assert_eq!(tok.tokenize("ab"), vec!["a", "b"]);
    }
}

//! Property-based tests for the text engine using proptest
//!
//! These tests exercise the collation and normalization laws over generated
//! input: mixes of real alphabet graphemes, confusable characters, and
//! text the alphabet does not cover.

use proptest::prelude::*;
use secwe_text::TextEngine;
use std::cmp::Ordering;
use std::sync::OnceLock;

fn engine() -> &'static TextEngine {
    static ENGINE: OnceLock<TextEngine> = OnceLock::new();
    ENGINE.get_or_init(|| TextEngine::bundled().unwrap())
}

// Strategy for generating words from alphabet graphemes, confusables, and
// characters outside the alphabet
fn word_strategy() -> impl Strategy<Value = String> {
    let pieces = vec![
        "a", "á", "c", "c\u{0313}", "cw", "e", "é", "i", "k", "kw", "k\u{0313}",
        "k\u{0313}w", "l", "ll", "m", "q", "qw", "s", "t", "ts", "ts\u{0313}",
        "u", "w", "x", "xw", "y", "7", "'", "\u{2019}", "\u{0294}", "e\u{0301}",
        "z", "-", " ", "A", "Kw", "TS",
    ];
    prop::collection::vec(prop::sample::select(pieces), 0..10).prop_map(|parts| parts.concat())
}

fn word_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..=20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: tokens always concatenate back to the input word
    #[test]
    fn prop_tokenize_concatenates_to_input(word in word_strategy()) {
        let tokens = engine().tokenize(&word);
        let joined: String = tokens.concat();
        prop_assert_eq!(joined, word);
    }

    /// Property: the first grapheme is the first token
    #[test]
    fn prop_first_grapheme_is_first_token(word in word_strategy()) {
        let tokens = engine().tokenize(&word);
        let first = engine().first_grapheme(&word);
        match tokens.first() {
            Some(token) => prop_assert_eq!(&first, token),
            None => prop_assert_eq!(first, ""),
        }
    }

    /// Property: compare is reflexive
    #[test]
    fn prop_compare_reflexive(word in word_strategy()) {
        prop_assert_eq!(engine().compare(&word, &word), Ordering::Equal);
    }

    /// Property: compare is antisymmetric
    #[test]
    fn prop_compare_antisymmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(
            engine().compare(&a, &b),
            engine().compare(&b, &a).reverse(),
            "compare({:?}, {:?}) is not the reverse of compare({:?}, {:?})",
            a, b, b, a
        );
    }

    /// Property: the precomputed sort key orders exactly like compare
    #[test]
    fn prop_sort_key_agrees_with_compare(a in word_strategy(), b in word_strategy()) {
        let collator = engine().collator();
        prop_assert_eq!(
            collator.sort_key(&a).cmp(&collator.sort_key(&b)),
            collator.compare(&a, &b),
            "sort_key and compare disagree on {:?} vs {:?}",
            a, b
        );
    }

    /// Property: sorted output is ordered under compare and is a permutation
    /// of the input
    #[test]
    fn prop_sort_orders_and_preserves(words in word_list_strategy()) {
        let sorted = engine().sort_words(words.clone());

        prop_assert_eq!(sorted.len(), words.len());
        for pair in sorted.windows(2) {
            prop_assert_ne!(
                engine().compare(&pair[0], &pair[1]),
                Ordering::Greater,
                "out of order: {:?} before {:?}",
                &pair[0], &pair[1]
            );
        }

        let mut input = words;
        let mut output = sorted;
        input.sort();
        output.sort();
        prop_assert_eq!(input, output);
    }

    /// Property: sorting an already-sorted list changes nothing
    #[test]
    fn prop_sort_idempotent(words in word_list_strategy()) {
        let once = engine().sort_words(words);
        let twice = engine().sort_words(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// Property: equal-key items keep their input order (stability)
    #[test]
    fn prop_sort_is_stable(words in word_list_strategy()) {
        let indexed: Vec<(String, usize)> = words
            .into_iter()
            .enumerate()
            .map(|(i, w)| (w, i))
            .collect();
        let sorted = engine().sort(indexed, |item| item.0.clone());

        for pair in sorted.windows(2) {
            if engine().compare(&pair[0].0, &pair[1].0) == Ordering::Equal {
                prop_assert!(
                    pair[0].1 < pair[1].1,
                    "equal words {:?} and {:?} swapped input positions {} and {}",
                    pair[0].0, pair[1].0, pair[0].1, pair[1].1
                );
            }
        }
    }

    /// Property: normalize is idempotent
    #[test]
    fn prop_normalize_idempotent(text in word_strategy()) {
        let once = engine().normalize(&text);
        let twice = engine().normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: normalized text has no confusables left
    #[test]
    fn prop_normalized_text_is_clean(text in word_strategy()) {
        let normalized = engine().normalize(&text);
        prop_assert!(
            !engine().has_confusables(&normalized),
            "confusables survived normalization of {:?}: {:?}",
            text, normalized
        );
    }

    /// Property: has_confusables agrees with find_confusables
    #[test]
    fn prop_has_agrees_with_find(text in word_strategy()) {
        prop_assert_eq!(
            engine().has_confusables(&text),
            !engine().find_confusables(&text).is_empty()
        );
    }

    /// Property: reported positions are in order and in bounds
    #[test]
    fn prop_find_positions_ordered_and_valid(text in word_strategy()) {
        let matches = engine().find_confusables(&text);
        let mut last = 0;
        for m in &matches {
            prop_assert!(m.position >= last);
            prop_assert!(m.position < text.len());
            prop_assert!(
                text[m.position..].starts_with(m.found.as_str()),
                "match {:?} not present at byte {} of {:?}",
                m.found, m.position, text
            );
            last = m.position;
        }
    }

    /// Property: unknown graphemes are reported exactly where they occur
    #[test]
    fn prop_find_unknown_positions_valid(word in word_strategy()) {
        for unknown in engine().find_unknown(&word) {
            prop_assert!(
                word[unknown.position..].starts_with(unknown.grapheme.as_str()),
                "unknown {:?} not present at byte {} of {:?}",
                unknown.grapheme, unknown.position, word
            );
        }
    }
}

//! Property-based tests for the text normalizer and ranker.
//!
//! Inputs mix Han characters, ASCII, punctuation, markup fragments and
//! boilerplate phrases so every normalization step gets exercised.

use proptest::prelude::*;
use zhfreq_core::analyzer::normalizer::{is_han, is_normalized, DEFAULT_BOILERPLATE};
use zhfreq_core::analyzer::{StopWordSet, TextNormalizer};
use zhfreq_core::rank::FrequencyRanker;
use zhfreq_core::types::{RankOptions, Token};

/// Fragments that exercise every normalization step.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[\u{4E00}-\u{4E80}]{1,6}",
        "[a-zA-Z0-9 ]{1,8}",
        "[，。！？、 \t\n]{1,3}",
        Just("<p>".to_string()),
        Just("</div>".to_string()),
        Just("<a href=\"x\">".to_string()),
        proptest::sample::select(DEFAULT_BOILERPLATE).prop_map(str::to_string),
        "[\u{3040}-\u{30FF}\u{AC00}-\u{AC40}]{1,3}",
    ]
}

fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
}

/// Splits text into two-character chunks, a cheap stand-in for a dictionary.
fn pairs(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(2)
        .map(|c| Token::new(c.iter().collect::<String>()))
        .collect()
}

proptest! {
    #[test]
    fn normalization_is_idempotent(input in mixed_text()) {
        let normalizer = TextNormalizer::default();
        let once = normalizer.normalize(&input);
        let twice = normalizer.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_han_and_single_spaces(input in mixed_text()) {
        let out = TextNormalizer::default().normalize(&input);
        prop_assert!(is_normalized(&out), "not normalized: {:?}", out);
        prop_assert!(out.chars().all(|c| is_han(c) || c == ' '));
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn arbitrary_unicode_never_panics(input in "\\PC{0,64}") {
        let out = TextNormalizer::default().normalize(&input);
        prop_assert!(is_normalized(&out));
    }

    #[test]
    fn ranked_entries_respect_filters(input in mixed_text(), min in 1usize..=3, top in 1usize..=20) {
        let text = TextNormalizer::default().normalize_text(&input);
        let ranker = FrequencyRanker::new(pairs as fn(&str) -> Vec<Token>);
        let options = RankOptions::top20().with_min_frequency(min).with_top_n(top);
        let ranking = ranker.rank(&text, options);

        prop_assert!(ranking.top.len() <= top);
        for entry in &ranking.top {
            prop_assert!(entry.count >= min);
            prop_assert!(entry.surface.chars().count() > 1);
            prop_assert!(!StopWordSet::chinese().contains(&entry.surface));
        }
        for token in &ranking.tokens {
            prop_assert!(token.chars > 1);
        }
        prop_assert!(ranking.top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn ties_keep_first_occurrence_order(input in mixed_text()) {
        let text = TextNormalizer::default().normalize_text(&input);
        let ranker = FrequencyRanker::new(pairs as fn(&str) -> Vec<Token>);
        let ranking = ranker.rank(&text, RankOptions::top20().with_top_n(usize::MAX));

        let first_seen = |surface: &str| {
            ranking.tokens.iter().position(|t| t.surface == surface)
        };
        for w in ranking.top.windows(2) {
            if w[0].count == w[1].count {
                prop_assert!(first_seen(&w[0].surface) < first_seen(&w[1].surface));
            }
        }
    }
}

//! Word frequency ranking.
//!
//! The ranker owns the exclusion policy: a token is counted only when it is
//! longer than one character and not a stop word. Everything downstream of
//! the ranker (statistics, report, presentation) sees only retained tokens.

mod frequency;
mod stats;

pub use frequency::FrequencyMap;
pub use stats::AnalysisStats;

use crate::analyzer::{JiebaSegmenter, NormalizedText, Segmenter, StopWordSet, Tokenizer};
use zhfreq_types::{RankOptions, RankedEntry, Token};

/// The result of ranking one normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    /// Retained tokens in reading order.
    pub tokens: Vec<Token>,
    /// Counts of retained tokens, limited to `count >= min_frequency`.
    pub frequencies: FrequencyMap,
    /// Highest-count entries, at most `top_n` of them.
    pub top: Vec<RankedEntry>,
    /// The options this ranking was computed with.
    pub options: RankOptions,
}

impl Ranking {
    /// Returns `true` when no entry survived filtering.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Number of distinct words that passed the frequency filter.
    #[inline(always)]
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.frequencies.len()
    }

    /// Summary statistics for this ranking.
    pub fn stats(&self) -> AnalysisStats {
        AnalysisStats::from_ranking(self)
    }
}

/// Segments, filters, counts and ranks normalized text.
pub struct FrequencyRanker<'w, S = JiebaSegmenter> {
    segmenter: S,
    stop_words: &'w StopWordSet,
    tokenizer: Tokenizer,
}

impl Default for FrequencyRanker<'static, JiebaSegmenter> {
    fn default() -> Self {
        Self::new(JiebaSegmenter::new())
    }
}

impl<S: Segmenter> FrequencyRanker<'static, S> {
    /// Creates a ranker using the default Chinese stop words.
    pub fn new(segmenter: S) -> Self {
        Self::with_stop_words(segmenter, StopWordSet::chinese())
    }
}

impl<'w, S: Segmenter> FrequencyRanker<'w, S> {
    /// Creates a ranker with a custom stop-word set.
    pub fn with_stop_words(segmenter: S, stop_words: &'w StopWordSet) -> Self {
        Self {
            segmenter,
            stop_words,
            tokenizer: Tokenizer::new(),
        }
    }

    /// The stop words this ranker excludes.
    pub fn stop_words(&self) -> &StopWordSet {
        self.stop_words
    }

    #[inline]
    fn keeps(&self, token: &Token) -> bool {
        token.chars > 1 && !self.stop_words.contains(&token.surface)
    }

    /// Segments `text` and returns the retained tokens in reading order.
    pub fn retained_tokens(&self, text: &NormalizedText) -> Vec<Token> {
        self.tokenizer
            .clauses(text.as_str())
            .flat_map(|clause| self.segmenter.segment(clause))
            .filter(|t| self.keeps(t))
            .collect()
    }

    /// Ranks `text`.
    ///
    /// An empty result is a valid outcome: it happens for empty input, for
    /// text made only of stop words and single characters, and whenever
    /// `min_frequency` exceeds the highest count.
    pub fn rank(&self, text: &NormalizedText, options: RankOptions) -> Ranking {
        let tokens = self.retained_tokens(text);

        let mut frequencies = FrequencyMap::new();
        for token in &tokens {
            frequencies.record(&token.surface);
        }

        let frequencies = frequencies.retain_min(options.min_frequency);
        let top = frequencies.ranked(options.top_n);

        tracing::debug!(
            tokens = tokens.len(),
            distinct = frequencies.len(),
            ranked = top.len(),
            "ranked text"
        );

        Ranking {
            tokens,
            frequencies,
            top,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::TextNormalizer;

    /// Treats every two characters as a word; a trailing odd character
    /// becomes a single-character token.
    fn pairs(text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        chars
            .chunks(2)
            .map(|c| Token::new(c.iter().collect::<String>()))
            .collect()
    }

    fn normalized(s: &str) -> NormalizedText {
        TextNormalizer::default().normalize_text(s)
    }

    fn ranker() -> FrequencyRanker<'static, fn(&str) -> Vec<Token>> {
        FrequencyRanker::new(pairs as fn(&str) -> Vec<Token>)
    }

    #[test]
    fn counts_and_orders() {
        let r = ranker().rank(&normalized("数据科学 数据模型 数据"), RankOptions::top20());
        assert_eq!(r.top[0], RankedEntry::new("数据", 3));
        assert_eq!(r.top.len(), 3);
        assert_eq!(r.distinct_words(), 3);
    }

    #[test]
    fn single_chars_excluded() {
        // "数据科" splits into "数据" + "科".
        let r = ranker().rank(&normalized("数据科"), RankOptions::top20());
        assert_eq!(r.tokens, vec![Token::new("数据")]);
        assert_eq!(r.frequencies.get("科"), None);
    }

    #[test]
    fn stop_words_excluded() {
        let r = ranker().rank(&normalized("我们数据 我们"), RankOptions::top20());
        assert_eq!(r.frequencies.get("我们"), None);
        assert!(r.tokens.iter().all(|t| t.surface != "我们"));
        assert_eq!(r.frequencies.get("数据"), Some(1));
    }

    #[test]
    fn custom_stop_words() {
        let stop = StopWordSet::from_list(&["数据"]);
        let ranker = FrequencyRanker::with_stop_words(pairs as fn(&str) -> Vec<Token>, &stop);
        let r = ranker.rank(&normalized("数据模型 我们"), RankOptions::top20());
        assert_eq!(r.frequencies.get("数据"), None);
        // Not excluded by the custom set.
        assert_eq!(r.frequencies.get("我们"), Some(1));
        assert_eq!(ranker.stop_words().len(), 1);
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let r = ranker().rank(&normalized("模型算法 算法模型 数据"), RankOptions::top20());
        let order: Vec<&str> = r.top.iter().map(|e| e.surface.as_str()).collect();
        assert_eq!(order, vec!["模型", "算法", "数据"]);
    }

    #[test]
    fn min_frequency_filters_map_and_top() {
        let opts = RankOptions::top20().with_min_frequency(2);
        let r = ranker().rank(&normalized("数据科学 数据模型"), opts);
        assert_eq!(r.top, vec![RankedEntry::new("数据", 2)]);
        assert_eq!(r.distinct_words(), 1);
        // The token stream is not affected by the frequency filter.
        assert_eq!(r.tokens.len(), 4);
    }

    #[test]
    fn min_frequency_above_max_is_empty() {
        let opts = RankOptions::top20().with_min_frequency(1_000_000);
        let r = ranker().rank(&normalized("数据科学 数据模型"), opts);
        assert!(r.is_empty());
        assert_eq!(r.distinct_words(), 0);
    }

    #[test]
    fn empty_text_is_empty_result() {
        let r = ranker().rank(&NormalizedText::default(), RankOptions::top20());
        assert!(r.is_empty());
        assert!(r.tokens.is_empty());
    }

    #[test]
    fn only_noise_is_empty_result() {
        let r = ranker().rank(&normalized("的 了 是"), RankOptions::top20());
        assert!(r.is_empty());
    }

    #[test]
    fn top_n_truncates() {
        let r = ranker().rank(&normalized("甲乙丙丁戊己庚辛"), RankOptions::top20().with_top_n(2));
        assert_eq!(r.top.len(), 2);
        assert_eq!(r.distinct_words(), 4);
        assert_eq!(r.options.top_n, 2);
    }

    #[test]
    fn clauses_are_segmented_independently() {
        // Without the clause split, pairing would produce "据科" across the space.
        let r = ranker().rank(&normalized("数 据科"), RankOptions::top20());
        assert_eq!(r.frequencies.get("据科"), Some(1));
        let r = ranker().rank(&normalized("数据 科学"), RankOptions::top20());
        assert_eq!(r.frequencies.get("据科"), None);
    }
}

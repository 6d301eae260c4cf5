//! End-to-end analysis: resolve → normalize → rank.
//!
//! Every call returns a fresh [`Analysis`]; nothing is cached between runs.
//! Failed or thin sources are replaced by the embedded sample text, and the
//! result records why so the presentation layer can say so.

use zhfreq_types::{FallbackReason, Origin, RankOptions, MIN_VIABLE_CHARS};

use crate::analyzer::{JiebaSegmenter, NormalizedText, Segmenter, TextNormalizer};
use crate::rank::{AnalysisStats, FrequencyRanker, Ranking};
use crate::source::{sample_document, FetchConfig, Source, SourceResolver};

/// How an analysis turned out, for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one word was ranked.
    Ranked,
    /// No word survived filtering; lowering the frequency threshold may help.
    Empty,
}

/// The result of one pipeline run.
#[derive(Debug)]
pub struct Analysis {
    /// What the caller asked for.
    pub requested: Origin,
    /// What was actually analyzed (the sample on fallback).
    pub analyzed: Origin,
    /// Set when the sample text replaced the requested source.
    pub fallback: Option<FallbackReason>,
    /// The cleaned text that was ranked.
    pub text: NormalizedText,
    /// Ranked words.
    pub ranking: Ranking,
}

impl Analysis {
    /// Returns `true` if the sample text was analyzed instead of the request.
    #[inline(always)]
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Ranked or empty.
    pub fn outcome(&self) -> Outcome {
        if self.ranking.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Ranked
        }
    }

    /// Summary statistics.
    pub fn stats(&self) -> AnalysisStats {
        self.ranking.stats()
    }
}

/// Resolved, cleaned input ready for ranking.
#[derive(Debug)]
pub struct PreparedText {
    /// Origin of the text in `text`.
    pub origin: Origin,
    /// Normalized text.
    pub text: NormalizedText,
    /// Set when the sample text replaced the requested source.
    pub fallback: Option<FallbackReason>,
}

/// The full pipeline.
pub struct Analyzer<'w, S = JiebaSegmenter> {
    resolver: SourceResolver,
    normalizer: TextNormalizer,
    ranker: FrequencyRanker<'w, S>,
    min_viable_chars: usize,
}

impl Default for Analyzer<'static, JiebaSegmenter> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<'static, JiebaSegmenter> {
    /// Default resolver, normalizer, jieba segmenter and stop words.
    pub fn new() -> Self {
        Self::with_parts(
            SourceResolver::default(),
            TextNormalizer::default(),
            FrequencyRanker::default(),
        )
    }

    /// Defaults, with a custom fetch configuration.
    pub fn with_fetch_config(config: FetchConfig) -> Self {
        Self::with_parts(
            SourceResolver::new(config),
            TextNormalizer::default(),
            FrequencyRanker::default(),
        )
    }
}

impl<'w, S: Segmenter> Analyzer<'w, S> {
    /// Assembles a pipeline from its stages.
    pub fn with_parts(
        resolver: SourceResolver,
        normalizer: TextNormalizer,
        ranker: FrequencyRanker<'w, S>,
    ) -> Self {
        Self {
            resolver,
            normalizer,
            ranker,
            min_viable_chars: MIN_VIABLE_CHARS,
        }
    }

    /// Overrides the fallback threshold.
    pub fn with_min_viable_chars(mut self, min_viable_chars: usize) -> Self {
        self.min_viable_chars = min_viable_chars;
        self
    }

    /// Resolves and normalizes `source`, substituting the sample text when
    /// acquisition fails or leaves fewer than the minimum viable characters.
    ///
    /// The sample itself is never subject to the threshold.
    pub fn prepare(&self, source: &Source) -> PreparedText {
        let fallback = match self.resolver.resolve(source) {
            Ok(doc) => {
                let text = self.normalizer.normalize_text(doc.content());
                let chars = text.char_count();
                if chars >= self.min_viable_chars || *source == Source::Sample {
                    tracing::debug!(origin = %doc.origin(), chars, "source accepted");
                    return PreparedText {
                        origin: doc.origin().clone(),
                        text,
                        fallback: None,
                    };
                }
                FallbackReason::InsufficientContent {
                    chars,
                    min_chars: self.min_viable_chars,
                }
            }
            Err(err) => FallbackReason::AcquisitionFailed(err),
        };

        tracing::warn!(requested = %source.origin(), reason = %fallback, "using sample text");

        let (origin, content) = sample_document().into_parts();
        PreparedText {
            origin,
            text: self.normalizer.normalize_text(&content),
            fallback: Some(fallback),
        }
    }

    /// Runs the whole pipeline for `source`.
    pub fn analyze(&self, source: &Source, options: RankOptions) -> Analysis {
        let PreparedText {
            origin,
            text,
            fallback,
        } = self.prepare(source);

        let ranking = self.ranker.rank(&text, options);
        if ranking.is_empty() {
            tracing::info!(
                min_frequency = options.min_frequency,
                "no words survived filtering"
            );
        }

        Analysis {
            requested: source.origin(),
            analyzed: origin,
            fallback,
            text,
            ranking,
        }
    }
}

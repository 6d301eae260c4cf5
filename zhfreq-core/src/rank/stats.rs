//! Summary numbers derived from a [`Ranking`], shown above the ranked table.

use crate::rank::Ranking;

/// A snapshot of ranking statistics for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Distinct words that passed the frequency filter.
    pub distinct_words: usize,
    /// Retained tokens before the frequency filter.
    pub retained_tokens: usize,
    /// Count of the most frequent word, 0 when nothing was ranked.
    pub top_count: usize,
    /// Number of ranked entries handed to the presentation layer.
    pub displayed: usize,
}

impl AnalysisStats {
    /// Collects statistics from a ranking.
    pub fn from_ranking(ranking: &Ranking) -> Self {
        Self {
            distinct_words: ranking.frequencies.len(),
            retained_tokens: ranking.tokens.len(),
            top_count: ranking.top.first().map_or(0, |e| e.count),
            displayed: ranking.top.len(),
        }
    }

    /// Share of retained tokens taken by the most frequent word.
    pub fn top_share(&self) -> f32 {
        if self.retained_tokens == 0 {
            return 0.0;
        }
        self.top_count as f32 / self.retained_tokens as f32
    }
}

impl core::fmt::Display for AnalysisStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} distinct words, {} tokens, showing {}",
            self.distinct_words, self.retained_tokens, self.displayed
        )?;

        if self.top_count > 0 {
            write!(
                f,
                ", top count {} ({:.1}%)",
                self.top_count,
                self.top_share() * 100.0
            )?;
        }

        Ok(())
    }
}

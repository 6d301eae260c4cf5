//! Word segmentation.
//!
//! Chinese is written without spaces between words, so word boundaries come
//! from a dictionary/statistical segmenter. The pipeline only depends on the
//! [`Segmenter`] trait; [`JiebaSegmenter`] is the default implementation.

use jieba_rs::Jieba;
use zhfreq_types::Token;

/// Splits a run of unspaced text into word-like tokens, left to right.
pub trait Segmenter {
    /// Segments `text` into tokens in reading order.
    fn segment(&self, text: &str) -> Vec<Token>;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Vec<Token>,
{
    #[inline]
    fn segment(&self, text: &str) -> Vec<Token> {
        self(text)
    }
}

/// Segmenter backed by the jieba dictionary, with HMM recognition of
/// out-of-vocabulary words enabled by default.
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl JiebaSegmenter {
    /// Loads the bundled dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    /// Enables or disables HMM discovery of unknown words.
    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }
}

impl core::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("hmm", &self.hmm)
            .finish_non_exhaustive()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        self.jieba
            .cut(text, self.hmm)
            .into_iter()
            .map(Token::new)
            .collect()
    }
}

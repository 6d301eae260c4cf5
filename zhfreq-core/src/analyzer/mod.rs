//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Reduces raw text to Chinese characters and single spaces
//! - **Tokenizer**: Splits normalized text into space-delimited clauses
//! - **Segmenter**: Splits each clause into words
//! - **Stop words**: The exclusion list applied before counting

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{NormalizedText, NormalizerConfig, TextNormalizer};
pub use segmenter::{JiebaSegmenter, Segmenter};
pub use stopwords::StopWordSet;
pub use tokenizer::{Clauses, Tokenizer};

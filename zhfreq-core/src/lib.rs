//! Chinese web-text word frequency analysis.
//!
//! The pipeline has three stages, each producing a new immutable value:
//!
//! 1. [`source`]: resolve a URL, file, literal or the embedded sample into a
//!    [`RawDocument`](source::RawDocument)
//! 2. [`analyzer`]: reduce raw text to Chinese characters and single spaces
//! 3. [`rank`]: segment, drop short words and stop words, count and rank
//!
//! [`Analyzer`] glues the stages together and substitutes the sample text
//! when a source fails or is too short.
//!
//! ```no_run
//! use zhfreq_core::{Analyzer, Source};
//! use zhfreq_core::types::RankOptions;
//!
//! let analysis = Analyzer::new().analyze(&Source::Sample, RankOptions::top20());
//! for entry in &analysis.ranking.top {
//!     println!("{}", entry);
//! }
//! ```

pub mod analyzer;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod source;

pub use zhfreq_types as types;

pub use pipeline::{Analysis, Analyzer, Outcome, PreparedText};
pub use rank::{AnalysisStats, FrequencyMap, FrequencyRanker, Ranking};
pub use source::{FetchConfig, RawDocument, Source, SourceResolver};

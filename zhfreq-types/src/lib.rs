//! Core types shared across the zhfreq pipeline.
//!
//! This crate holds the values that cross stage boundaries, so the
//! analyzer, the source resolver and the presentation layer can agree on
//! them without depending on each other:
//!
//! - **Tokens and rankings**: [`Token`], [`RankedEntry`], [`RankOptions`]
//! - **Acquisition failures**: [`AcquisitionError`], [`FallbackReason`]
//! - **Static configuration**: thresholds and defaults used by every stage

#![warn(missing_docs)]

use core::fmt;
use std::path::PathBuf;

/// Default network timeout for a single page fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// A `<p>` element only contributes when its trimmed text is longer than this
/// many characters.
pub const MIN_PARAGRAPH_CHARS: usize = 10;

/// Cleaned text shorter than this many characters is replaced by the
/// embedded sample text.
pub const MIN_VIABLE_CHARS: usize = 50;

/// Default number of ranked entries handed to the presentation layer.
pub const DEFAULT_TOP_N: usize = 20;

/// Number of ranked entries written to the persisted report.
pub const REPORT_TOP_N: usize = 20;

/// Number of tokens per line in the report's token stream section.
pub const REPORT_TOKENS_PER_LINE: usize = 10;

/// Inclusive range of minimum frequencies the presentation layer offers.
pub const MIN_FREQUENCY_RANGE: core::ops::RangeInclusive<usize> = 1..=5;

/// A word-like unit produced by segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Surface form as it appears in the text.
    pub surface: String,
    /// Length in characters (Unicode scalar values), not bytes.
    pub chars: usize,
}

impl Token {
    /// Creates a token, computing its character length.
    pub fn new(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        let chars = surface.chars().count();
        Self { surface, chars }
    }

    /// Returns the surface string.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.surface
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}

/// A (surface, count) pair in the ranked output.
///
/// Ranked sequences are ordered by count (descending). Equal counts keep the
/// order in which the words first appeared in the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    /// Word surface.
    pub surface: String,
    /// Number of occurrences in the retained token stream.
    pub count: usize,
}

impl RankedEntry {
    /// Creates a ranked entry.
    pub fn new(surface: impl Into<String>, count: usize) -> Self {
        Self {
            surface: surface.into(),
            count,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.surface, self.count)
    }
}

/// Ranking options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Entries occurring fewer times than this are dropped.
    /// Default: 1 (keep everything).
    pub min_frequency: usize,
    /// Maximum number of ranked entries returned.
    /// Default: 20
    pub top_n: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::top20()
    }
}

impl RankOptions {
    /// Twenty entries, no frequency filter. Used by most chart kinds.
    pub const fn top20() -> Self {
        Self {
            min_frequency: 1,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Ten entries, no frequency filter.
    pub const fn top10() -> Self {
        Self {
            min_frequency: 1,
            top_n: 10,
        }
    }

    /// Eight entries, the most a radar chart can show legibly.
    pub const fn radar() -> Self {
        Self {
            min_frequency: 1,
            top_n: 8,
        }
    }

    /// Returns a copy with a different minimum frequency.
    pub const fn with_min_frequency(self, min_frequency: usize) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Returns a copy with a different result count.
    pub const fn with_top_n(self, top_n: usize) -> Self {
        Self { top_n, ..self }
    }
}

/// Where a raw document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Fetched from a network location.
    Url(String),
    /// Read from a local file.
    Path(PathBuf),
    /// Supplied directly by the caller.
    Literal,
    /// The embedded sample text.
    Sample,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Url(url) => f.write_str(url),
            Origin::Path(path) => write!(f, "{}", path.display()),
            Origin::Literal => f.write_str("<literal text>"),
            Origin::Sample => f.write_str("<embedded sample>"),
        }
    }
}

/// Category of an acquisition failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionErrorKind {
    /// The location is not a valid absolute http(s) URL.
    InvalidUrl,
    /// Connection, DNS, TLS, timeout or body read failure.
    Network,
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response declared a content type that is not text.
    NonText(String),
    /// The bytes could not be decoded as text.
    Decode,
    /// A local file could not be read.
    Io,
}

impl fmt::Display for AcquisitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionErrorKind::InvalidUrl => f.write_str("invalid URL"),
            AcquisitionErrorKind::Network => f.write_str("network error"),
            AcquisitionErrorKind::Status(code) => write!(f, "HTTP status {}", code),
            AcquisitionErrorKind::NonText(content_type) => {
                write!(f, "non-text response ({})", content_type)
            }
            AcquisitionErrorKind::Decode => f.write_str("undecodable content"),
            AcquisitionErrorKind::Io => f.write_str("I/O error"),
        }
    }
}

type BoxedCause = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Failure to obtain a raw document.
///
/// Low-level errors (network, decoding, I/O) are wrapped here at the source
/// boundary; the original error stays reachable through
/// [`core::error::Error::source`].
#[derive(Debug)]
pub struct AcquisitionError {
    origin: Origin,
    kind: AcquisitionErrorKind,
    cause: Option<BoxedCause>,
}

impl AcquisitionError {
    /// Creates an error without an underlying cause.
    pub fn new(origin: Origin, kind: AcquisitionErrorKind) -> Self {
        Self {
            origin,
            kind,
            cause: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        self.cause = Some(cause.into());
        self
    }

    /// The location that failed.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The failure category.
    pub fn kind(&self) -> &AcquisitionErrorKind {
        &self.kind
    }
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to acquire {}: {}", self.origin, self.kind)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl core::error::Error for AcquisitionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn core::error::Error + 'static))
    }
}

/// Why the embedded sample text was analyzed instead of the requested source.
#[derive(Debug)]
pub enum FallbackReason {
    /// The source could not be acquired at all.
    AcquisitionFailed(AcquisitionError),
    /// The source was acquired but held too little Chinese text.
    InsufficientContent {
        /// Characters left after normalization.
        chars: usize,
        /// The threshold that was not met.
        min_chars: usize,
    },
}

impl FallbackReason {
    /// Returns `true` for acquisition failures, `false` for short content.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(self, FallbackReason::AcquisitionFailed(_))
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::AcquisitionFailed(err) => {
                write!(f, "{}; analyzing the embedded sample text instead", err)
            }
            FallbackReason::InsufficientContent { chars, min_chars } => {
                write!(
                    f,
                    "source text too short ({} chars, need {}); analyzing the embedded sample text instead",
                    chars, min_chars
                )
            }
        }
    }
}

//! Text source resolution.
//!
//! Turns a [`Source`] into a [`RawDocument`]. Network, decoding and I/O
//! errors stop here: callers only ever see [`AcquisitionError`].

pub mod extract;
pub mod fetch;
pub mod sample;

use std::fs;
use std::path::{Path, PathBuf};

use zhfreq_types::{AcquisitionError, AcquisitionErrorKind, Origin};

pub use fetch::{FetchConfig, Fetcher};
pub use sample::{sample_document, SAMPLE_TEXT};

/// What to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch an article page.
    Url(String),
    /// Read a local UTF-8 text file.
    File(PathBuf),
    /// Analyze text supplied by the caller.
    Text(String),
    /// Analyze the embedded sample text.
    Sample,
}

impl Source {
    /// The origin a document resolved from this source will carry.
    pub fn origin(&self) -> Origin {
        match self {
            Source::Url(url) => Origin::Url(url.clone()),
            Source::File(path) => Origin::Path(path.clone()),
            Source::Text(_) => Origin::Literal,
            Source::Sample => Origin::Sample,
        }
    }
}

/// Raw text of unknown quality, as acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    origin: Origin,
    content: String,
}

impl RawDocument {
    /// Creates a document.
    pub fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self {
            origin,
            content: content.into(),
        }
    }

    /// Where the content came from.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Splits into origin and content.
    pub fn into_parts(self) -> (Origin, String) {
        (self.origin, self.content)
    }
}

/// Resolves sources into raw documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceResolver {
    fetcher: Fetcher,
}

impl SourceResolver {
    /// Creates a resolver that fetches with the given configuration.
    pub const fn new(config: FetchConfig) -> Self {
        Self {
            fetcher: Fetcher::new(config),
        }
    }

    /// Acquires the raw document for `source`.
    ///
    /// # Errors
    ///
    /// Returns an [`AcquisitionError`] when a URL cannot be fetched or a
    /// file cannot be read as UTF-8. `Text` and `Sample` never fail.
    pub fn resolve(&self, source: &Source) -> Result<RawDocument, AcquisitionError> {
        match source {
            Source::Url(url) => self.fetcher.fetch(url),
            Source::File(path) => read_file(path),
            Source::Text(text) => Ok(RawDocument::new(Origin::Literal, text.as_str())),
            Source::Sample => Ok(sample_document()),
        }
    }
}

fn read_file(path: &Path) -> Result<RawDocument, AcquisitionError> {
    let origin = Origin::Path(path.to_path_buf());
    let bytes = fs::read(path).map_err(|e| {
        AcquisitionError::new(origin.clone(), AcquisitionErrorKind::Io).with_cause(e)
    })?;
    let content = String::from_utf8(bytes).map_err(|e| {
        AcquisitionError::new(origin.clone(), AcquisitionErrorKind::Decode).with_cause(e)
    })?;
    tracing::debug!(path = %path.display(), chars = content.chars().count(), "read file");
    Ok(RawDocument::new(origin, content))
}

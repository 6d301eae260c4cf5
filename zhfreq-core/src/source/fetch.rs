//! Single-shot page fetching.
//!
//! One GET request per call, bounded by a timeout, no retries. Every failure
//! is converted into an [`AcquisitionError`] before it leaves this module.

use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use zhfreq_types::{AcquisitionError, AcquisitionErrorKind, Origin, DEFAULT_TIMEOUT_SECS};

use super::extract::extract_from_html;
use super::RawDocument;

/// Browser-style client identifier with the tool name appended.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/120.0 Safari/537.36 zhfreq/",
    env!("CARGO_PKG_VERSION")
);

/// Fetch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Upper bound on the whole request, connect through body.
    /// Default: 15 seconds
    pub timeout: Duration,
    /// Sent as `User-Agent`.
    pub user_agent: &'static str,
    /// Skip TLS certificate validation.
    /// Default: true
    pub accept_invalid_certs: bool,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT,
            accept_invalid_certs: true,
            use_system_proxy: true,
        }
    }
}

impl FetchConfig {
    /// Returns a copy with a different timeout.
    pub const fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Configuration for talking to a local server directly.
    pub const fn direct() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT,
            accept_invalid_certs: true,
            use_system_proxy: false,
        }
    }
}

/// Fetches a URL and extracts its body text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fetcher {
    config: FetchConfig,
}

impl Fetcher {
    /// Creates a fetcher with the specified configuration.
    pub const fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn client(&self) -> reqwest::Result<Client> {
        let mut builder = Client::builder()
            .user_agent(self.config.user_agent)
            .timeout(self.config.timeout)
            .danger_accept_invalid_certs(self.config.accept_invalid_certs);
        if !self.config.use_system_proxy {
            builder = builder.no_proxy();
        }
        builder.build()
    }

    /// Issues one GET request for `url` and returns the extracted body text.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if `url` is not an absolute http(s) URL
    /// - `Network` for connection, TLS, timeout and body read failures
    /// - `Status` for non-success responses
    /// - `NonText` if the declared content type is not textual
    pub fn fetch(&self, url: &str) -> Result<RawDocument, AcquisitionError> {
        let origin = Origin::Url(url.to_owned());
        let fail = |kind| AcquisitionError::new(origin.clone(), kind);

        let parsed =
            Url::parse(url).map_err(|e| fail(AcquisitionErrorKind::InvalidUrl).with_cause(e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(fail(AcquisitionErrorKind::InvalidUrl));
        }

        let client = self
            .client()
            .map_err(|e| fail(AcquisitionErrorKind::Network).with_cause(e))?;

        let response = client
            .get(parsed)
            .send()
            .map_err(|e| fail(AcquisitionErrorKind::Network).with_cause(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(AcquisitionErrorKind::Status(status.as_u16())));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if let Some(ct) = content_type.as_deref() {
            if !is_textual(ct) {
                return Err(fail(AcquisitionErrorKind::NonText(ct.to_owned())));
            }
        }

        let body = response
            .bytes()
            .map_err(|e| fail(AcquisitionErrorKind::Network).with_cause(e))?;

        let (html, encoding) = decode_body(&body, content_type.as_deref());
        tracing::info!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            encoding = encoding.name(),
            "fetched page"
        );

        let text = extract_from_html(&html);
        tracing::debug!(url, chars = text.chars().count(), "extracted body text");

        Ok(RawDocument::new(origin, text))
    }
}

/// Returns `true` for `text/*` and any HTML or XML media type.
pub fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime.contains("html") || mime.contains("xml")
}

/// Extracts the `charset` parameter of a `Content-Type` value.
pub fn declared_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').trim_matches('\''))
            .filter(|v| !v.is_empty())
    })
}

/// Decodes a response body.
///
/// Resolution order: the declared charset if it names a known encoding,
/// then UTF-8 if the bytes are valid UTF-8, then a content-based guess.
/// Malformed sequences are replaced, never rejected.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> (String, &'static Encoding) {
    let encoding = content_type
        .and_then(declared_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| sniff_encoding(bytes));

    let (text, used, _) = encoding.decode(bytes);
    (text.into_owned(), used)
}

fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

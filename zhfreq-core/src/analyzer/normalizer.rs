//! Text normalizer: reduces raw text to Chinese characters and single spaces.
//!
//! This runs after HTML extraction as a second pass over whatever markup
//! survived. The output is the input contract of the tokenizer:
//!
//! - only characters in `U+4E00..=U+9FA5` and ASCII spaces
//! - no leading or trailing space
//! - no consecutive spaces

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// Navigation labels and page furniture that show up in scraped article text.
pub const DEFAULT_BOILERPLATE: &[&str] = &[
    "首页",
    "返回顶部",
    "上一篇",
    "下一篇",
    "分享到",
    "责任编辑",
    "版权所有",
    "扫一扫",
    "点击查看",
];

/// First character of the retained script range (CJK Unified Ideographs).
pub const HAN_START: char = '\u{4E00}';
/// Last character of the retained script range.
pub const HAN_END: char = '\u{9FA5}';

/// Returns `true` if `c` is kept by the normalizer.
#[inline(always)]
pub const fn is_han(c: char) -> bool {
    c >= HAN_START && c <= HAN_END
}

/// Returns `true` if `text` already satisfies the normalizer's output contract.
pub fn is_normalized(text: &str) -> bool {
    if text.starts_with(' ') || text.ends_with(' ') || text.contains("  ") {
        return false;
    }
    text.chars().all(|c| c == ' ' || is_han(c))
}

/// Text that has passed through [`TextNormalizer`].
///
/// Only the normalizer constructs values of this type, so holding one is
/// proof that the output contract above holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Returns the text as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` if nothing survived normalization.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configuration options for text normalization.
#[derive(Clone, Copy, Debug)]
pub struct NormalizerConfig {
    /// Phrases removed by exact substring match before the character filter.
    pub boilerplate: &'static [&'static str],
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            boilerplate: DEFAULT_BOILERPLATE,
        }
    }
}

impl NormalizerConfig {
    /// A configuration that removes no phrases.
    pub const fn without_boilerplate() -> Self {
        Self { boilerplate: &[] }
    }
}

/// Chinese text normalizer.
///
/// Performs the following operations, in order:
/// - Replaces markup tags (`<...>`) with a space
/// - Replaces configured boilerplate phrases with a space
/// - Replaces every character outside `U+4E00..=U+9FA5` with a space
/// - Collapses space runs and trims both ends
///
/// Removed content is replaced by a space rather than deleted, so removal
/// can never splice two fragments into a new phrase. That keeps the
/// operation idempotent.
///
/// # Examples
///
/// ```
/// use zhfreq_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("<p>人工智能 is  great!!</p>"), "人工智能");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity when it is
    /// large enough.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        let mut text = MARKUP_TAG.replace_all(input, " ");
        for &phrase in self.config.boilerplate {
            if !phrase.is_empty() && text.contains(phrase) {
                text = Cow::Owned(text.replace(phrase, " "));
            }
        }

        out.reserve(text.len());
        let mut pending_space = false;

        for ch in text.chars() {
            if is_han(ch) {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            } else {
                pending_space = true;
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Normalizes text into a [`NormalizedText`].
    pub fn normalize_text(&self, input: &str) -> NormalizedText {
        NormalizedText(self.normalize(input))
    }
}

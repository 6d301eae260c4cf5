//! Clause splitting.
//!
//! The normalizer leaves a single space wherever punctuation, markup or
//! foreign script used to be. The runs between those spaces are clauses, and
//! each one is segmented on its own so no word straddles a sentence break:
//!
//! ```text
//! "机器学习 深度学习 自然语言处理"  ->  "机器学习", "深度学习", "自然语言处理"
//! ```
//!
//! Input must already be normalized: no leading, trailing or doubled
//! spaces. Debug builds check this.

use memchr::{memchr, memmem};

/// Splits normalized text into clauses.
///
/// ```
/// use zhfreq_core::analyzer::Tokenizer;
///
/// let clauses: Vec<&str> = Tokenizer::new().clauses("机器学习 深度学习").collect();
/// assert_eq!(clauses, ["机器学习", "深度学习"]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Returns an iterator over the clauses of `normalized`, borrowed from it.
    #[inline]
    pub fn clauses<'n>(&self, normalized: &'n str) -> Clauses<'n> {
        debug_assert!(
            !normalized.starts_with(' ') && !normalized.ends_with(' '),
            "tokenizer: input has surrounding spaces, normalize it first"
        );
        debug_assert!(
            memmem::find(normalized.as_bytes(), b"  ").is_none(),
            "tokenizer: input has doubled spaces, normalize it first"
        );
        Clauses { rest: normalized }
    }
}

/// Iterator returned by [`Tokenizer::clauses`].
#[derive(Debug, Clone)]
pub struct Clauses<'n> {
    rest: &'n str,
}

impl<'n> Iterator for Clauses<'n> {
    type Item = &'n str;

    fn next(&mut self) -> Option<&'n str> {
        if self.rest.is_empty() {
            return None;
        }
        // A space is one ASCII byte, so both sides stay on char boundaries.
        match memchr(b' ', self.rest.as_bytes()) {
            Some(i) => {
                let clause = &self.rest[..i];
                self.rest = &self.rest[i + 1..];
                Some(clause)
            }
            None => Some(core::mem::take(&mut self.rest)),
        }
    }
}

impl core::iter::FusedIterator for Clauses<'_> {}

//! Stop-word filtering.
//!
//! The default set is built once per process and shared read-only by every
//! analysis; callers needing a different policy build their own set up front.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Function words, pronouns, conjunctions and sentence particles that carry
/// no topical weight.
pub const CHINESE_STOP_WORDS: &[&str] = &[
    "的", "了", "是", "在", "和", "有", "就", "都", "这", "那", "个", "为", "把", "我", "你",
    "他", "她", "它", "我们", "你们", "他们", "这里", "那里", "什么", "怎么", "为什么", "如何",
    "然后", "但是", "如果", "因为", "所以", "虽然", "既然", "之", "于", "也", "还", "及", "与",
    "或", "即", "所", "将", "会", "可", "能", "应", "该", "要", "需", "须", "得", "过", "着",
    "啊", "呀", "呢", "吗", "吧",
];

static DEFAULT_STOP_WORDS: Lazy<StopWordSet> =
    Lazy::new(|| StopWordSet::from_list(CHINESE_STOP_WORDS));

/// An immutable set of excluded surface strings.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: FxHashSet<String>,
}

impl StopWordSet {
    /// The process-wide default Chinese set.
    pub fn chinese() -> &'static StopWordSet {
        &DEFAULT_STOP_WORDS
    }

    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Check if a word is a stop word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_contains_particles() {
        let set = StopWordSet::chinese();
        for w in ["的", "了", "我们", "为什么", "吧"] {
            assert!(set.contains(w), "{} should be a stop word", w);
        }
        assert!(!set.contains("人工智能"));
    }

    #[test]
    fn default_set_is_shared() {
        let a = StopWordSet::chinese() as *const StopWordSet;
        let b = StopWordSet::chinese() as *const StopWordSet;
        assert_eq!(a, b);
    }

    #[test]
    fn default_set_has_no_duplicates_lost() {
        let unique: FxHashSet<&str> = CHINESE_STOP_WORDS.iter().copied().collect();
        assert_eq!(StopWordSet::chinese().len(), unique.len());
    }

    #[test]
    fn custom_and_empty_sets() {
        let custom = StopWordSet::from_list(&["数据"]);
        assert!(custom.contains("数据"));
        assert!(!custom.contains("的"));
        assert_eq!(custom.len(), 1);

        let empty = StopWordSet::empty();
        assert!(empty.is_empty());
        assert!(!empty.contains("的"));
    }

    #[test]
    fn collect_from_iterator() {
        let set: StopWordSet = ["甲", "乙"].into_iter().collect();
        assert!(set.contains("乙"));
        assert_eq!(set.len(), 2);
    }
}

//! Dictionary lookups
//!
//! The validation rules only need to ask "is this a real word?". Anything that can answer
//! that implements [`Dictionary`]: the embedded word set, a file loaded at startup, or a
//! plain closure.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// A source of truth for English word membership
pub trait Dictionary {
    /// Whether `word` (already lowercase and trimmed) is a recognized word
    fn is_word(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// In-memory set of known words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from any iterator of words
    ///
    /// Words are lowercased and trimmed; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSet {
    fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_set_lookup() {
        let set = WordSet::from_words(["silk", "worm"]);
        assert!(set.is_word("silk"));
        assert!(set.is_word("worm"));
        assert!(!set.is_word("xyzzy"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn word_set_normalizes_entries() {
        let set = WordSet::from_words(["  Silk ", "WORM", "", "   "]);
        assert!(set.is_word("silk"));
        assert!(set.is_word("worm"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn word_set_deduplicates() {
        let set = WordSet::from_words(["milk", "MILK", "milk"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_word_set() {
        let set = WordSet::default();
        assert!(set.is_empty());
        assert!(!set.is_word("silk"));
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let set = WordSet::embedded();
        assert!(!set.is_empty());
        assert!(set.is_word("silk"));
        assert!(set.is_word("worm"));
        assert!(!set.is_word("xyzzy"));
    }

    #[test]
    fn closure_dictionary() {
        let short_words = |w: &str| w.len() <= 4;
        assert!(short_words.is_word("silk"));
        assert!(!short_words.is_word("silkworm"));
    }

    #[test]
    fn trait_object_dictionary() {
        let set = WordSet::from_words(["silk"]);
        let dictionary: &dyn Dictionary = &set;
        assert!(dictionary.is_word("silk"));
    }
}

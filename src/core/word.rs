//! Candidate normalization and letter multisets
//!
//! A `LetterBag` counts how many times each letter occurs in a word, so a candidate
//! can be checked against the letters a root word makes available.

use rustc_hash::FxHashMap;

/// Normalize user input into the form every rule compares against
///
/// Lowercases and trims surrounding whitespace.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A multiset of letters with per-letter counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterBag {
    /// Build a bag holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterBag;
    ///
    /// let bag = LetterBag::new("silkworm");
    /// assert_eq!(bag.count('s'), 1);
    /// assert_eq!(bag.len(), 8);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut bag = Self::default();
        for letter in word.chars() {
            *bag.counts.entry(letter).or_insert(0) += 1;
            bag.len += 1;
        }
        bag
    }

    /// How many times `letter` is still available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters left in the bag
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Take one occurrence of `letter` out of the bag
    ///
    /// Returns `false` and leaves the bag untouched if the letter is not available.
    pub fn remove(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&letter);
                }
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this bag's letters
    ///
    /// Each letter of `word` consumes one occurrence, in order. Works on a copy, so
    /// the bag itself is not changed.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.remove(letter))
    }
}

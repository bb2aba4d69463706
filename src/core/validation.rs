//! Submission rules
//!
//! A candidate is checked against a fixed sequence of rules. The first rule that fails
//! decides the rejection, so the order below is the order players see messages in.

use super::word::{LetterBag, normalize};
use crate::dictionary::Dictionary;
use std::fmt;

/// Shortest word the game accepts, in letters
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    IsRootWord,
    AlreadyUsed,
    NotSubsequence,
    NotInDictionary,
}

impl Rejection {
    /// Short heading for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::IsRootWord => "Word is the start word",
            Self::AlreadyUsed => "Word used already",
            Self::NotSubsequence => "Word not possible",
            Self::NotInDictionary => "Word not recognized",
        }
    }

    /// Longer explanation for an alert
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => format!("The word should be at least {MIN_WORD_LENGTH} letters"),
            Self::IsRootWord | Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotSubsequence => format!("You can't spell that word from '{root_word}'!"),
            Self::NotInDictionary => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of checking one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Accepted,
    Rejected(Rejection),
}

impl ValidationResult {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Check that `word` has not been found already
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Check that `word` can be spelled from the letters of `root_word`
///
/// Each root letter may be used at most as often as it occurs in the root word.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("silk", "silkworm"));
/// assert!(!is_possible("silks", "silkworm"));
/// ```
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    LetterBag::new(root_word).can_spell(word)
}

/// Run every rule against `candidate`, stopping at the first failure
///
/// `root_word` and `used_words` are expected in normalized form. The candidate is
/// normalized here. Nothing is mutated; recording an accepted word is up to the caller.
///
/// # Examples
/// ```
/// use word_scramble::core::{Rejection, ValidationResult, validate};
/// use word_scramble::dictionary::WordSet;
///
/// let dictionary = WordSet::from_words(["silk", "worm"]);
/// let used = vec!["worm".to_string()];
///
/// assert_eq!(validate("Silk", "silkworm", &used, &dictionary), ValidationResult::Accepted);
/// assert_eq!(
///     validate("worm", "silkworm", &used, &dictionary),
///     ValidationResult::Rejected(Rejection::AlreadyUsed)
/// );
/// ```
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    root_word: &str,
    used_words: &[String],
    dictionary: &D,
) -> ValidationResult {
    let answer = normalize(candidate);

    let reason = if answer.chars().count() < MIN_WORD_LENGTH {
        Rejection::TooShort
    } else if answer == root_word {
        Rejection::IsRootWord
    } else if !is_original(&answer, used_words) {
        Rejection::AlreadyUsed
    } else if !is_possible(&answer, root_word) {
        Rejection::NotSubsequence
    } else if !dictionary.is_word(&answer) {
        Rejection::NotInDictionary
    } else {
        return ValidationResult::Accepted;
    };

    ValidationResult::Rejected(reason)
}

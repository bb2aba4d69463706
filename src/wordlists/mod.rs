//! Word lists for Word Scramble
//!
//! Provides the root-word and dictionary lists compiled into the binary, plus loaders for
//! lists supplied at runtime.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        assert!(!START_WORDS.is_empty());
        for &word in START_WORDS {
            assert!(
                word.len() >= 3,
                "Start word '{word}' is shorter than a valid answer"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_include_fallback() {
        assert!(START_WORDS.contains(&"silkworm"));
    }

    #[test]
    fn dictionary_is_lowercase() {
        for &word in &DICTIONARY[..10] {
            // Just check first 10 for speed
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}

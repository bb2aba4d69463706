//! One-shot validation of a single word

use crate::core::{ValidationResult, normalize, validate};
use crate::dictionary::Dictionary;

/// Input for checking one candidate against a root word
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub root_word: String,
    pub candidate: String,
    pub used_words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub fn new(root_word: &str, candidate: &str) -> Self {
        Self {
            root_word: normalize(root_word),
            candidate: candidate.to_string(),
            used_words: Vec::new(),
        }
    }

    /// Treat these words as already found
    #[must_use]
    pub fn with_used_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.used_words = words.into_iter().map(|w| normalize(w.as_ref())).collect();
        self
    }
}

/// Result of a check, with the normalized candidate that was tested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub root_word: String,
    pub word: String,
    pub result: ValidationResult,
}

/// Validate one candidate without a running session
#[must_use]
pub fn check_word<D: Dictionary + ?Sized>(config: &CheckConfig, dictionary: &D) -> CheckResult {
    CheckResult {
        root_word: config.root_word.clone(),
        word: normalize(&config.candidate),
        result: validate(
            &config.candidate,
            &config.root_word,
            &config.used_words,
            dictionary,
        ),
    }
}

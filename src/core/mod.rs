//! Core domain types for Word Scramble
//!
//! This module contains the validation rule set and the letter multiset it is built on.
//! Everything here is pure: no I/O, no randomness, no shared state.

mod validation;
mod word;

pub use validation::{
    MIN_WORD_LENGTH, Rejection, ValidationResult, is_original, is_possible, validate,
};
pub use word::{LetterBag, normalize};

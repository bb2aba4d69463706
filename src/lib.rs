//! Word Scramble
//!
//! A word game played in the terminal: a root word is drawn at random and the player finds
//! the words that can be spelled from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, ValidationResult};
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::session::SessionController;
//!
//! let dictionary = WordSet::from_words(["silk", "worm"]);
//! let mut game = SessionController::with_seed(vec!["silkworm".to_string()], dictionary, 1);
//!
//! assert_eq!(game.submit("silk"), ValidationResult::Accepted);
//! assert_eq!(game.submit("silk"), ValidationResult::Rejected(Rejection::AlreadyUsed));
//! assert_eq!(game.used_words(), &["silk"]);
//! ```

// Validation rules
pub mod core;

// Word membership oracle
pub mod dictionary;

// Session state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;

// Interactive TUI interface
pub mod interactive;

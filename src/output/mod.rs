//! Terminal output formatting
//!
//! Display utilities for the line-based mode and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_accepted, print_banner, print_check_result, print_rejection, print_root_word,
    print_score_sheet, print_used_words,
};

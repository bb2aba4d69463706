//! Display functions for game state and results

use super::formatters::{HELP_TEXT, length_badge, score_column_width, score_row, words_header};
use crate::commands::CheckResult;
use crate::core::{Rejection, ValidationResult};
use crate::session::ScoreEntry;
use colored::Colorize;
use std::io::{self, Write};

/// Print the opening banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║                    Word Scramble                             ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(out, "{HELP_TEXT}")?;
    writeln!(
        out,
        "Commands: ':new' for a new word, ':scores' for past rounds, ':quit' to exit\n"
    )
}

/// Print the root word the player is working from
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_root_word<W: Write>(out: &mut W, root_word: &str) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        root_word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print a rejected candidate's title and message
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_rejection<W: Write>(
    out: &mut W,
    rejection: Rejection,
    root_word: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "❌ {}: {}",
        rejection.title().red().bold(),
        rejection.message(root_word)
    )
}

/// Print an accepted word
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_accepted<W: Write>(out: &mut W, word: &str, score: usize) -> io::Result<()> {
    writeln!(
        out,
        "✓ {} {}",
        word.green().bold(),
        format!("(score {score})").bright_black()
    )
}

/// Print the words found so far, most recent first
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_used_words<W: Write>(out: &mut W, used_words: &[String]) -> io::Result<()> {
    if used_words.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", words_header(used_words.len()).bright_cyan().bold())?;
    for word in used_words {
        writeln!(out, "  {} {word}", length_badge(word))?;
    }
    Ok(())
}

/// Print the score sheet of finished rounds
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_score_sheet<W: Write>(out: &mut W, scores: &[ScoreEntry]) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", "SCORES".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    if scores.is_empty() {
        writeln!(out, "  No finished rounds yet")?;
        return Ok(());
    }

    let width = score_column_width(scores);
    for entry in scores {
        writeln!(out, "  {}", score_row(entry, width))?;
    }
    writeln!(out)
}

/// Print the outcome of a one-shot check
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_check_result<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    match result.result {
        ValidationResult::Accepted => writeln!(
            out,
            "✅ {} is a valid word from {}",
            result.word.green().bold(),
            result.root_word.to_uppercase().bright_yellow()
        ),
        ValidationResult::Rejected(reason) => print_rejection(out, reason, &result.root_word),
    }
}

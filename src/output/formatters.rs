//! Formatting utilities shared by the terminal front ends

use crate::session::ScoreEntry;

/// Hint shown under the word list
pub const HELP_TEXT: &str =
    "Enter all the words that you can imagine that are within the word provided on top.";

/// Circled number showing a word's length, e.g. `④` for "silk"
///
/// Lengths past 20 have no circled glyph and fall back to `(n)`.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = word.chars().count();
    match len {
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// Heading above the found words; empty until the first word is found
#[must_use]
pub fn words_header(count: usize) -> String {
    if count > 0 {
        format!("My Words - {count}")
    } else {
        String::new()
    }
}

/// Width of the widest word in a score sheet, at least as wide as the "Word" heading
#[must_use]
pub fn score_column_width(scores: &[ScoreEntry]) -> usize {
    scores
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Word".len())
}

/// One aligned score-sheet row
#[must_use]
pub fn score_row(entry: &ScoreEntry, width: usize) -> String {
    format!("{:<width$}  {:>3}", entry.word, entry.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_circled() {
        assert_eq!(length_badge("silk"), "④");
        assert_eq!(length_badge("abc"), "③");
        assert_eq!(length_badge("silkworm"), "⑧");
        assert_eq!(length_badge("a"), "①");
    }

    #[test]
    fn length_badge_falls_back_for_long_words() {
        assert_eq!(length_badge(&"a".repeat(21)), "(21)");
        assert_eq!(length_badge(""), "(0)");
    }

    #[test]
    fn words_header_hidden_when_empty() {
        assert_eq!(words_header(0), "");
        assert_eq!(words_header(3), "My Words - 3");
    }

    #[test]
    fn score_rows_align() {
        let scores = vec![
            ScoreEntry {
                word: "silkworm".to_string(),
                score: 4,
            },
            ScoreEntry {
                word: "absolute".to_string(),
                score: 12,
            },
        ];
        let width = score_column_width(&scores);
        assert_eq!(width, 8);
        assert_eq!(score_row(&scores[0], width), "silkworm    4");
        assert_eq!(score_row(&scores[1], width), "absolute   12");
    }

    #[test]
    fn score_column_width_minimum() {
        assert_eq!(score_column_width(&[]), 4);
    }
}

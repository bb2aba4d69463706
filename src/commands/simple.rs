//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::ValidationResult;
use crate::dictionary::Dictionary;
use crate::output::{
    print_accepted, print_banner, print_rejection, print_root_word, print_score_sheet,
    print_used_words,
};
use crate::session::SessionController;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Finish the round and draw a new root word
    NewWord,
    /// Show the score sheet
    Scores,
    /// Leave the game
    Quit,
    /// Anything else is a word to check
    Guess(String),
}

impl Command {
    /// Parse a raw input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":new" | ":n" => Self::NewWord,
            ":scores" | ":s" => Self::Scores,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Reads one command per line from `input` until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, R, W>(
    controller: &mut SessionController<D>,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    print_banner(&mut out)?;
    print_root_word(&mut out, controller.root_word())?;

    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match Command::parse(&line) {
            Command::Quit => break,
            Command::NewWord => {
                controller.restart();
                writeln!(out, "\n🔄 New word!\n")?;
                print_root_word(&mut out, controller.root_word())?;
            }
            Command::Scores => {
                print_score_sheet(&mut out, controller.score_history())?;
            }
            Command::Guess(candidate) => match controller.submit(&candidate) {
                ValidationResult::Accepted => {
                    let word = controller.used_words()[0].clone();
                    print_accepted(&mut out, &word, controller.score())?;
                    print_used_words(&mut out, controller.used_words())?;
                }
                ValidationResult::Rejected(reason) => {
                    print_rejection(&mut out, reason, controller.root_word())?;
                }
            },
        }
    }

    writeln!(out, "👋 Thanks for playing!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use std::io::Cursor;

    fn controller() -> SessionController<WordSet> {
        SessionController::with_seed(
            vec!["silkworm".to_string()],
            WordSet::from_words(["silk", "worm", "milk"]),
            0,
        )
    }

    fn play(controller: &mut SessionController<WordSet>, input: &str) -> String {
        let mut out = Vec::new();
        run_simple(controller, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(":new\n"), Command::NewWord);
        assert_eq!(Command::parse(" :N "), Command::NewWord);
        assert_eq!(Command::parse(":scores"), Command::Scores);
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse("silk\n"), Command::Guess("silk\n".to_string()));
    }

    #[test]
    fn quits_at_end_of_input() {
        let mut controller = controller();
        let text = play(&mut controller, "");
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn accepts_and_rejects() {
        let mut controller = controller();
        let text = play(&mut controller, "silk\nsilk\nsl\n:quit\n");

        assert_eq!(controller.used_words(), &["silk"]);
        assert!(text.contains("Be more original"));
        assert!(text.contains("at least 3 letters"));
    }

    #[test]
    fn new_word_records_score() {
        let mut controller = controller();
        play(&mut controller, "silk\nworm\n:new\n:scores\n");

        assert!(controller.used_words().is_empty());
        assert_eq!(controller.score_history().len(), 1);
        assert_eq!(controller.score_history()[0].score, 2);
    }

    #[test]
    fn scores_sheet_printed() {
        let mut controller = controller();
        let text = play(&mut controller, "milk\n:new\n:scores\n:q\n");
        assert!(text.contains("silkworm    1"));
    }

    #[test]
    fn stops_reading_after_quit() {
        let mut controller = controller();
        play(&mut controller, ":quit\nsilk\n");
        assert!(controller.used_words().is_empty());
    }
}

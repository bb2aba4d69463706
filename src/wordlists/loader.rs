//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word lists that cannot be used
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be opened or read as UTF-8
    Io { path: PathBuf, source: io::Error },
    /// The file was read but holds no words
    Empty { path: PathBuf },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not load word list {}: {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "Word list {} contains no words", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Split newline-delimited text into normalized words
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Silkworm\n\n  absolute \n");
/// assert_eq!(words, vec!["silkworm", "absolute"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or `WordListError::Empty` if
/// it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

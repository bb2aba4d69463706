//! Game session state
//!
//! A [`SessionController`] owns the current root word, the words found for it, and the
//! scores of earlier rounds. Front ends drive it through `submit` and `restart` and
//! re-render from its accessors.

use crate::core::{ValidationResult, normalize, validate};
use crate::dictionary::Dictionary;
use log::{debug, info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Root word used when the start-word list has nothing to offer
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Final score of one finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub word: String,
    pub score: usize,
}

/// Everything that changes while playing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Word every answer must be built from
    pub root_word: String,
    /// Accepted answers, most recent first
    pub used_words: Vec<String>,
    /// One entry per finished round, oldest first
    pub score_history: Vec<ScoreEntry>,
}

/// Pick a root word uniformly at random
///
/// Falls back to [`FALLBACK_ROOT_WORD`] when `word_list` is empty.
pub fn choose_root_word<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> String {
    word_list.choose(rng).map_or_else(
        || {
            warn!("Start word list is empty, using '{FALLBACK_ROOT_WORD}'");
            FALLBACK_ROOT_WORD.to_string()
        },
        |word| normalize(word),
    )
}

/// Owns a [`Session`] and applies the game rules to it
pub struct SessionController<D: Dictionary> {
    session: Session,
    word_list: Vec<String>,
    dictionary: D,
    rng: StdRng,
}

impl<D: Dictionary> SessionController<D> {
    /// Create a controller seeded from the operating system and start the first round
    #[must_use]
    pub fn new(word_list: Vec<String>, dictionary: D) -> Self {
        Self::with_rng(word_list, dictionary, StdRng::from_os_rng())
    }

    /// Create a controller with a fixed seed, for reproducible games
    #[must_use]
    pub fn with_seed(word_list: Vec<String>, dictionary: D, seed: u64) -> Self {
        Self::with_rng(word_list, dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(word_list: Vec<String>, dictionary: D, rng: StdRng) -> Self {
        let mut controller = Self {
            session: Session::default(),
            word_list,
            dictionary,
            rng,
        };
        controller.start_game();
        controller
    }

    /// Draw a new root word from the configured list and clear the found words
    ///
    /// Does not record a score; use [`restart`](Self::restart) to finish a round.
    pub fn start_game(&mut self) -> &str {
        self.session.root_word = choose_root_word(&self.word_list, &mut self.rng);
        self.session.used_words.clear();
        info!("New root word: {}", self.session.root_word);
        &self.session.root_word
    }

    /// Check a candidate against the current round and record it if accepted
    ///
    /// Rejections leave the session untouched.
    pub fn submit(&mut self, candidate: &str) -> ValidationResult {
        let result = validate(
            candidate,
            &self.session.root_word,
            &self.session.used_words,
            &self.dictionary,
        );

        match result {
            ValidationResult::Accepted => {
                let answer = normalize(candidate);
                debug!("Accepted '{answer}'");
                self.session.used_words.insert(0, answer);
            }
            ValidationResult::Rejected(reason) => {
                debug!("Rejected '{}': {reason:?}", candidate.trim());
            }
        }

        result
    }

    /// Finish the current round and start the next one
    ///
    /// Appends the round's score, draws a new root word and clears the found words.
    pub fn restart(&mut self) -> &str {
        let entry = ScoreEntry {
            word: self.session.root_word.clone(),
            score: self.session.used_words.len(),
        };
        info!("Round over: {} scored {}", entry.word, entry.score);
        self.session.score_history.push(entry);
        self.start_game()
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.session.root_word
    }

    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.session.used_words
    }

    #[inline]
    #[must_use]
    pub fn score_history(&self) -> &[ScoreEntry] {
        &self.session.score_history
    }

    /// Score of the current round so far
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        self.session.used_words.len()
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordSet;

    fn silkworm_only() -> SessionController<WordSet> {
        SessionController::with_seed(
            vec!["silkworm".to_string()],
            WordSet::from_words(["silk", "worm", "milk", "slim"]),
            7,
        )
    }

    #[test]
    fn starts_with_word_from_list() {
        let controller = silkworm_only();
        assert_eq!(controller.root_word(), "silkworm");
        assert!(controller.used_words().is_empty());
        assert!(controller.score_history().is_empty());
    }

    #[test]
    fn empty_list_falls_back() {
        let controller = SessionController::with_seed(Vec::new(), WordSet::default(), 1);
        assert_eq!(controller.root_word(), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn root_word_is_normalized() {
        let controller =
            SessionController::with_seed(vec!["  SilkWorm ".to_string()], WordSet::default(), 1);
        assert_eq!(controller.root_word(), "silkworm");
    }

    #[test]
    fn accepted_words_go_to_front() {
        let mut controller = silkworm_only();
        assert_eq!(controller.submit("silk"), ValidationResult::Accepted);
        assert_eq!(controller.submit(" WORM "), ValidationResult::Accepted);
        assert_eq!(controller.used_words(), &["worm", "silk"]);
        assert_eq!(controller.score(), 2);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let mut controller = silkworm_only();
        controller.submit("silk");
        let before = controller.session().clone();

        assert_eq!(
            controller.submit("silk"),
            ValidationResult::Rejected(Rejection::AlreadyUsed)
        );
        assert_eq!(
            controller.submit("sl"),
            ValidationResult::Rejected(Rejection::TooShort)
        );
        assert_eq!(
            controller.submit("silks"),
            ValidationResult::Rejected(Rejection::NotSubsequence)
        );
        assert_eq!(controller.session(), &before);
    }

    #[test]
    fn restart_records_score_and_clears_words() {
        let mut controller = silkworm_only();
        controller.submit("silk");
        controller.submit("milk");

        let root = controller.restart().to_string();
        assert_eq!(root, "silkworm");
        assert!(controller.used_words().is_empty());
        assert_eq!(
            controller.score_history(),
            &[ScoreEntry {
                word: "silkworm".to_string(),
                score: 2
            }]
        );
    }

    #[test]
    fn each_restart_appends_one_entry() {
        let mut controller = silkworm_only();
        controller.restart();
        controller.submit("slim");
        controller.restart();
        assert_eq!(controller.score_history().len(), 2);
        assert_eq!(controller.score_history()[0].score, 0);
        assert_eq!(controller.score_history()[1].score, 1);
    }

    #[test]
    fn restart_draws_from_list() {
        let words: Vec<String> = ["absolute", "blackout", "calendar"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut controller = SessionController::with_seed(words.clone(), WordSet::default(), 42);
        for _ in 0..20 {
            let root = controller.restart().to_string();
            assert!(words.contains(&root));
        }
    }

    #[test]
    fn same_seed_same_words() {
        let words: Vec<String> = ["absolute", "blackout", "calendar", "daughter"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut a = SessionController::with_seed(words.clone(), WordSet::default(), 99);
        let mut b = SessionController::with_seed(words, WordSet::default(), 99);
        for _ in 0..5 {
            assert_eq!(a.restart(), b.restart());
        }
    }

    #[test]
    fn start_game_does_not_score() {
        let mut controller = silkworm_only();
        controller.submit("silk");
        controller.start_game();
        assert!(controller.used_words().is_empty());
        assert!(controller.score_history().is_empty());
    }

    #[test]
    fn choose_root_word_from_slice() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            choose_root_word(&["Absolute".to_string()], &mut rng),
            "absolute"
        );
        assert_eq!(choose_root_word(&[], &mut rng), FALLBACK_ROOT_WORD);
    }
}

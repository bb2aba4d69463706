// Property tests for the validation rules

use proptest::prelude::*;
use word_scramble::core::{LetterBag, MIN_WORD_LENGTH, ValidationResult, is_possible, validate};
use word_scramble::dictionary::WordSet;
use word_scramble::session::SessionController;

fn dictionary() -> WordSet {
    WordSet::from_words(["silk", "worm", "milk", "slim", "owl", "mow", "rim"])
}

proptest! {
    #[test]
    fn validate_is_deterministic(
        candidate in "[a-zA-Z ]{0,10}",
        root in "[a-z]{3,10}",
        used in proptest::collection::vec("[a-z]{3,6}", 0..4),
    ) {
        let dictionary = dictionary();
        let first = validate(&candidate, &root, &used, &dictionary);
        let second = validate(&candidate, &root, &used, &dictionary);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn accepted_words_obey_invariant(
        candidate in "[a-z]{0,9}",
        root in "[a-z]{3,10}",
        used in proptest::collection::vec("[a-z]{3,6}", 0..4),
    ) {
        let everything = |_: &str| true;
        if validate(&candidate, &root, &used, &everything) == ValidationResult::Accepted {
            prop_assert!(candidate.chars().count() >= MIN_WORD_LENGTH);
            prop_assert_ne!(&candidate, &root);
            prop_assert!(!used.contains(&candidate));
            prop_assert!(is_possible(&candidate, &root));
        }
    }

    #[test]
    fn every_permutation_of_root_is_possible(root in "[a-z]{1,12}", seed in any::<u64>()) {
        let mut letters: Vec<char> = root.chars().collect();
        // Deterministic shuffle driven by the seed
        let len = letters.len();
        for i in 0..len {
            let j = (seed as usize).wrapping_add(i * 7) % len;
            letters.swap(i, j);
        }
        let shuffled: String = letters.into_iter().collect();
        prop_assert!(LetterBag::new(&root).can_spell(&shuffled));
    }

    #[test]
    fn longer_than_root_is_never_possible(root in "[a-z]{1,8}", extra in "[a-z]") {
        let candidate = format!("{root}{extra}");
        prop_assert!(!is_possible(&candidate, &root));
    }

    #[test]
    fn rejections_leave_session_untouched(candidates in proptest::collection::vec("[a-z]{0,9}", 1..12)) {
        let mut game = SessionController::with_seed(vec!["silkworm".to_string()], dictionary(), 3);
        for candidate in &candidates {
            let before = game.session().clone();
            match game.submit(candidate) {
                ValidationResult::Accepted => {
                    prop_assert_eq!(game.used_words().len(), before.used_words.len() + 1);
                    prop_assert_eq!(&game.used_words()[0], candidate);
                }
                ValidationResult::Rejected(_) => prop_assert_eq!(game.session(), &before),
            }
        }
    }
}

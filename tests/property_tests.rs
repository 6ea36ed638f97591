//! Property-based tests for the quiz session and tier lookup.
//!
//! Answer sequences are generated as (question index, value) pairs and
//! replayed against a fresh session.

use loyalty_quiz::data::{PAGE_COUNT, QUESTION_BANK, QUESTION_COUNT, SCORE_TIERS};
use loyalty_quiz::{Phase, QuizSession, page_range, resolve_tier};
use proptest::prelude::*;

prop_compose! {
    fn answer_sequence()(
        answers in prop::collection::vec((0..QUESTION_COUNT, any::<bool>()), 0..40)
    ) -> Vec<(usize, bool)> {
        answers
    }
}

fn replay(answers: &[(usize, bool)]) -> QuizSession {
    let mut session = QuizSession::new();
    for &(index, value) in answers {
        session.answer_question(QUESTION_BANK[index].id, value);
    }
    session
}

proptest! {
    #[test]
    fn reset_clears_every_answer(answers in answer_sequence()) {
        let mut session = replay(&answers);
        session.reset();
        for question in session.questions() {
            prop_assert!(!question.answered());
            prop_assert_eq!(question.answer(), None);
        }
        prop_assert_eq!(session.phase(), Phase::Answering { page: 0 });
    }

    #[test]
    fn last_answer_wins(index in 0..QUESTION_COUNT, first in any::<bool>(), second in any::<bool>()) {
        let id = QUESTION_BANK[index].id;
        let mut session = QuizSession::new();
        session.answer_question(id, first);
        session.answer_question(id, second);
        prop_assert_eq!(session.questions()[index].answer(), Some(second));
        prop_assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn answered_iff_answer_present(answers in answer_sequence()) {
        let session = replay(&answers);
        for question in session.questions() {
            prop_assert_eq!(question.answered(), question.answer().is_some());
        }
    }

    #[test]
    fn can_advance_matches_page_fill(answers in answer_sequence()) {
        let session = replay(&answers);
        for page in 0..PAGE_COUNT {
            let range = page_range(page);
            let size = range.len();
            let answered = session.questions()[range].iter().filter(|q| q.answered()).count();
            prop_assert_eq!(session.can_advance(page), answered == size);
        }
    }

    #[test]
    fn results_stay_hidden_until_complete(answers in answer_sequence()) {
        let mut session = replay(&answers);
        session.reveal_results();
        prop_assert_eq!(session.show_results(), session.answered_count() == QUESTION_COUNT);
    }

    #[test]
    fn counts_are_consistent(answers in answer_sequence()) {
        let session = replay(&answers);
        prop_assert!(session.yes_count() <= session.answered_count());
        prop_assert!(session.answered_count() <= QUESTION_COUNT);
        let expected = session.answered_count() as f64 * 10.0;
        prop_assert!((session.progress_percent() - expected).abs() < 1e-9);
    }

    #[test]
    fn every_score_maps_to_exactly_one_tier(score in 0usize..=10) {
        let matching: Vec<_> = SCORE_TIERS.iter().filter(|t| t.contains(score)).collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(resolve_tier(score), matching[0]);
    }

    #[test]
    fn navigation_never_leaves_bounds(moves in prop::collection::vec(any::<bool>(), 0..20), answers in answer_sequence()) {
        let mut session = replay(&answers);
        for forward in moves {
            let before = session.current_page();
            if forward {
                session.go_to_next_page();
                if session.current_page() != before {
                    prop_assert!(session.can_advance(before));
                }
            } else {
                session.go_to_previous_page();
            }
            prop_assert!(session.current_page() < PAGE_COUNT);
        }
    }
}

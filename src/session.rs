//! The quiz state machine: answers, pagination and the results gate.
//!
//! Every operation is infallible. A transition whose precondition does not
//! hold leaves the session untouched and is only logged.

use std::ops::Range;

use log::{debug, info};

use crate::data::{PAGE_COUNT, QUESTION_COUNT, QUESTIONS_PER_PAGE, fresh_questions};
use crate::models::{Phase, Question, ScoreTier};
use crate::scoring::{AnswerSummary, QuizSummary, resolve_tier};

/// Index range of the questions shown on `page`, empty past the last page.
pub fn page_range(page: usize) -> Range<usize> {
    if page >= PAGE_COUNT {
        return QUESTION_COUNT..QUESTION_COUNT;
    }
    let start = (page * QUESTIONS_PER_PAGE).min(QUESTION_COUNT);
    let end = (start + QUESTIONS_PER_PAGE).min(QUESTION_COUNT);
    start..end
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_page: usize,
    show_results: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: fresh_questions(),
            current_page: 0,
            show_results: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        PAGE_COUNT
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    pub fn phase(&self) -> Phase {
        if self.show_results {
            Phase::ShowingResults
        } else {
            Phase::Answering {
                page: self.current_page,
            }
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == PAGE_COUNT - 1
    }

    pub fn page_questions(&self, page: usize) -> &[Question] {
        &self.questions[page_range(page)]
    }

    pub fn current_questions(&self) -> &[Question] {
        self.page_questions(self.current_page)
    }

    /// Record `value` for the question with `id`, overwriting any earlier
    /// answer. Unknown ids are ignored.
    pub fn answer_question(&mut self, id: &str, value: bool) {
        match self.questions.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                question.set_answer(value);
                debug!("answered {} = {}", id, if value { "yes" } else { "no" });
            }
            None => debug!("ignoring answer for unknown question {:?}", id),
        }
    }

    /// True iff every question on `page` has been answered. False for pages
    /// that do not exist.
    pub fn can_advance(&self, page: usize) -> bool {
        let questions = self.page_questions(page);
        !questions.is_empty() && questions.iter().all(Question::answered)
    }

    pub fn go_to_next_page(&mut self) {
        if self.current_page + 1 < PAGE_COUNT && self.can_advance(self.current_page) {
            self.current_page += 1;
            debug!("moved to page {}", self.current_page);
        } else {
            debug!("next page blocked on page {}", self.current_page);
        }
    }

    pub fn go_to_previous_page(&mut self) {
        if self.current_page > 0 {
            self.current_page -= 1;
            debug!("moved back to page {}", self.current_page);
        }
    }

    /// Show the results, but only once every question has an answer.
    pub fn reveal_results(&mut self) {
        if self.is_complete() {
            self.show_results = true;
            info!("results revealed with {} yes answers", self.yes_count());
        } else {
            debug!(
                "results blocked with {}/{} answered",
                self.answered_count(),
                QUESTION_COUNT
            );
        }
    }

    /// Back to a fresh session with newly copied questions.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("session reset");
    }

    pub fn yes_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_yes()).count()
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.answered()).count()
    }

    pub fn progress_percent(&self) -> f64 {
        self.answered_count() as f64 / QUESTION_COUNT as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }

    pub fn result_tier(&self) -> &'static ScoreTier {
        resolve_tier(self.yes_count())
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            phase: self.phase(),
            answered_count: self.answered_count(),
            yes_count: self.yes_count(),
            progress_percent: self.progress_percent(),
            answers: self.questions.iter().map(AnswerSummary::from).collect(),
            tier: self.show_results.then(|| self.result_tier()),
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{QUESTION_BANK, SCORE_TIERS};

    fn answer_range(session: &mut QuizSession, range: Range<usize>, value: bool) {
        for index in range {
            let id = QUESTION_BANK[index].id;
            session.answer_question(id, value);
        }
    }

    fn answer_all(session: &mut QuizSession, yes: usize) {
        answer_range(session, 0..yes, true);
        answer_range(session, yes..QUESTION_COUNT, false);
    }

    #[test]
    fn test_initial_state() {
        let session = QuizSession::new();
        assert_eq!(session.phase(), Phase::Answering { page: 0 });
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.yes_count(), 0);
        assert_eq!(session.progress_percent(), 0.0);
        assert!(!session.show_results());
        assert!(session.questions().iter().all(|q| q.answer().is_none()));
    }

    #[test]
    fn test_page_partition() {
        assert_eq!(page_range(0), 0..4);
        assert_eq!(page_range(1), 4..8);
        assert_eq!(page_range(2), 8..10);
        assert!(page_range(3).is_empty());

        let session = QuizSession::new();
        let sizes: Vec<usize> = (0..PAGE_COUNT)
            .map(|p| session.page_questions(p).len())
            .collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn test_answer_overwrites_and_leaves_others_untouched() {
        let mut session = QuizSession::new();
        session.answer_question("q5", true);
        session.answer_question("q5", false);

        assert_eq!(session.question("q5").and_then(Question::answer), Some(false));
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.questions()[4].id, "q5");
    }

    #[test]
    fn test_answer_on_other_page_is_accepted() {
        let mut session = QuizSession::new();
        session.answer_question("q10", true);
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.yes_count(), 1);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut session = QuizSession::new();
        session.answer_question("q11", true);
        session.answer_question("", false);
        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn test_can_advance_requires_whole_page() {
        let mut session = QuizSession::new();
        answer_range(&mut session, 0..3, true);
        assert!(!session.can_advance(0));
        answer_range(&mut session, 3..4, false);
        assert!(session.can_advance(0));
        assert!(!session.can_advance(1));
        assert!(!session.can_advance(7));
    }

    #[test]
    fn test_next_page_blocked_until_page_answered() {
        let mut session = QuizSession::new();
        answer_range(&mut session, 0..3, true);
        session.go_to_next_page();
        assert_eq!(session.current_page(), 0);

        answer_range(&mut session, 3..4, true);
        session.go_to_next_page();
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_navigation_stops_at_bounds() {
        let mut session = QuizSession::new();
        session.go_to_previous_page();
        assert_eq!(session.current_page(), 0);

        answer_all(&mut session, 5);
        for _ in 0..5 {
            session.go_to_next_page();
        }
        assert_eq!(session.current_page(), 2);
        assert!(session.is_last_page());

        session.go_to_previous_page();
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_reveal_results_requires_all_answers() {
        let mut session = QuizSession::new();
        answer_range(&mut session, 0..9, true);
        session.reveal_results();
        assert!(!session.show_results());
        assert!(session.summary().tier.is_none());

        answer_range(&mut session, 9..10, true);
        session.reveal_results();
        assert_eq!(session.phase(), Phase::ShowingResults);
    }

    #[test]
    fn test_seven_yes_lands_in_second_tier() {
        let mut session = QuizSession::new();
        answer_all(&mut session, 7);
        assert_eq!(session.yes_count(), 7);
        assert_eq!(session.progress_percent(), 100.0);

        session.reveal_results();
        assert!(session.show_results());
        assert_eq!(session.result_tier(), &SCORE_TIERS[1]);
        assert_eq!((session.result_tier().min, session.result_tier().max), (6, 8));
    }

    #[test]
    fn test_reset_mid_session() {
        let mut session = QuizSession::new();
        answer_range(&mut session, 0..3, true);
        session.reset();

        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.current_page(), 0);
        assert!(!session.show_results());
    }

    #[test]
    fn test_reset_does_not_touch_earlier_snapshot() {
        let mut session = QuizSession::new();
        answer_all(&mut session, 10);
        session.reveal_results();
        let snapshot = session.clone();

        session.reset();
        session.answer_question("q1", false);

        assert_eq!(snapshot.yes_count(), 10);
        assert!(snapshot.show_results());
        assert!(QUESTION_BANK.iter().all(|q| !q.answered()));
    }

    #[test]
    fn test_summary_serializes() {
        let mut session = QuizSession::new();
        answer_all(&mut session, 2);
        session.reveal_results();

        let json: serde_json::Value =
            serde_json::from_str(&session.summary().to_json().unwrap()).unwrap();
        assert_eq!(json["phase"], "showing_results");
        assert_eq!(json["yes_count"], 2);
        assert_eq!(json["answers"][0]["id"], "q1");
        assert_eq!(json["tier"]["min"], 0);
    }
}

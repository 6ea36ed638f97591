use log::debug;

use crate::contact::ContactLauncher;
use crate::models::{Phase, Question};
use crate::session::QuizSession;

/// Keyboard-facing controller around one quiz session.
///
/// Adds what the terminal needs on top of the state machine: a focus
/// cursor on the current page and a one-line notice.
pub struct App {
    session: QuizSession,
    cursor: usize,
    launcher: ContactLauncher,
    notice: Option<String>,
}

impl App {
    pub fn new(launcher: ContactLauncher) -> Self {
        Self {
            session: QuizSession::new(),
            cursor: 0,
            launcher,
            notice: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn focused_question(&self) -> Option<&Question> {
        self.session.current_questions().get(self.cursor)
    }

    pub fn focus_next(&mut self) {
        let len = self.session.current_questions().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn focus_previous(&mut self) {
        let len = self.session.current_questions().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Answer the focused question, then jump to the next unanswered one
    /// on the page, if any.
    pub fn answer_focused(&mut self, value: bool) {
        if self.session.show_results() {
            return;
        }
        self.notice = None;
        let Some(id) = self.focused_question().map(|q| q.id) else {
            return;
        };
        self.session.answer_question(id, value);

        let questions = self.session.current_questions();
        let len = questions.len();
        let cursor = self.cursor;
        let next = (1..len)
            .map(|step| (cursor + step) % len)
            .find(|&index| !questions[index].answered());
        if let Some(next) = next {
            self.cursor = next;
        }
    }

    /// The "Next" button, which becomes "View Results" on the last page.
    pub fn advance(&mut self) {
        if self.session.show_results() {
            return;
        }
        if self.session.is_last_page() {
            self.session.reveal_results();
            self.notice = (!self.session.show_results())
                .then(|| "Answer all 10 questions to see your results".to_string());
            return;
        }

        let page = self.session.current_page();
        self.session.go_to_next_page();
        if self.session.current_page() == page {
            self.notice = Some("Answer every question on this page first".to_string());
        } else {
            self.notice = None;
            self.cursor = 0;
        }
    }

    /// The "Previous" button.
    pub fn go_back(&mut self) {
        if self.session.show_results() {
            return;
        }
        let page = self.session.current_page();
        self.session.go_to_previous_page();
        if self.session.current_page() != page {
            self.cursor = 0;
        }
        self.notice = None;
    }

    /// "Take Quiz Again".
    pub fn restart(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.notice = None;
    }

    /// The tier's call-to-action. Only available on the results screen.
    pub fn open_contact(&mut self) {
        if !self.session.show_results() {
            debug!("contact action ignored outside results");
            return;
        }
        self.notice = Some(self.launcher.launch());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ContactLauncher::default())
    }
}

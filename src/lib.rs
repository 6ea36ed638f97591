//! # loyalty-quiz
//!
//! A terminal rendition of the "Is Your Loyalty Program Really Working?"
//! check-up: ten yes/no questions over three pages, scored into one of four
//! result tiers with a call-to-action.
//!
//! The state machine in [`QuizSession`] and the tier lookup in
//! [`resolve_tier`] are usable on their own; [`Quiz`] wraps them in a
//! ratatui front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use loyalty_quiz::{ContactLauncher, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let summary = Quiz::new(ContactLauncher::Browser).run()?;
//!     println!("{} yes answers", summary.yes_count);
//!     Ok(())
//! }
//! ```

mod app;
pub mod contact;
pub mod data;
mod models;
mod scoring;
mod session;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{info, warn};

pub use app::App;
pub use contact::{CONTACT_URL, ContactLauncher};
pub use models::{Phase, Question, ScoreTier};
pub use scoring::{
    AnswerSummary, QuizSummary, TierCoverageError, check_tier_coverage, resolve_tier,
    resolve_tier_in,
};
pub use session::{QuizSession, page_range};

/// Error type for running the quiz.
#[derive(Debug)]
pub enum QuizError {
    /// IO error while driving the terminal.
    Io(io::Error),
    /// The final summary could not be encoded.
    Summary(serde_json::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Io(e) => write!(f, "IO error: {}", e),
            QuizError::Summary(e) => write!(f, "Failed to encode summary: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(e) => Some(e),
            QuizError::Summary(e) => Some(e),
        }
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Summary(err)
    }
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(launcher: ContactLauncher) -> Self {
        if let Err(e) = check_tier_coverage(&data::SCORE_TIERS, data::QUESTION_COUNT as u8) {
            warn!("tier table is inconsistent ({}); falling back to the lowest tier", e);
        }
        Self {
            app: App::new(launcher),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the user quits and returns the state
    /// the session was left in.
    pub fn run(mut self) -> Result<QuizSummary, QuizError> {
        info!("starting quiz session");
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result?;
        Ok(self.app.session().summary())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }
    match app.phase() {
        Phase::Answering { .. } => handle_answering_input(app, key),
        Phase::ShowingResults => handle_results_input(app, key),
    }
    false
}

fn handle_answering_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_previous(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_focused(true),
        KeyCode::Char('n') | KeyCode::Char('N') => app.answer_focused(false),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.advance(),
        KeyCode::Left | KeyCode::Char('h') => app.go_back(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => app.open_contact(),
        _ => {}
    }
}

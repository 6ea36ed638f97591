mod question;
mod tier;

pub use question::Question;
pub use tier::ScoreTier;

use serde::Serialize;

/// Where a quiz session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Answering the questions on `page` (0-based).
    Answering { page: usize },
    /// Terminal until the session is reset.
    ShowingResults,
}

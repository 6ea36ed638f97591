//! Score-to-tier resolution and the end-of-quiz summary.

use std::fmt;

use serde::Serialize;

use crate::QuizError;
use crate::data::{LOWEST_TIER, SCORE_TIERS};
use crate::models::{Phase, Question, ScoreTier};

/// Resolve a "Yes" count against the static tier table.
///
/// Every score in `0..=10` matches exactly one tier. Anything else falls
/// back to the lowest-scoring tier rather than failing, so an edited
/// table with a gap still produces a result.
pub fn resolve_tier(yes_count: usize) -> &'static ScoreTier {
    resolve_tier_in(&SCORE_TIERS, yes_count).unwrap_or(LOWEST_TIER)
}

/// Scan `tiers` for the bracket containing `yes_count`.
///
/// Falls back to the last entry when nothing matches. Only an empty table
/// yields `None`.
pub fn resolve_tier_in(tiers: &[ScoreTier], yes_count: usize) -> Option<&ScoreTier> {
    tiers
        .iter()
        .find(|tier| tier.contains(yes_count))
        .or_else(|| tiers.last())
}

/// A score the tier table does not map to exactly one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierCoverageError {
    Gap(u8),
    Overlap(u8),
}

impl fmt::Display for TierCoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierCoverageError::Gap(score) => write!(f, "no tier covers a score of {}", score),
            TierCoverageError::Overlap(score) => {
                write!(f, "more than one tier covers a score of {}", score)
            }
        }
    }
}

impl std::error::Error for TierCoverageError {}

/// Check that `tiers` covers every score in `0..=max_score` exactly once.
pub fn check_tier_coverage(tiers: &[ScoreTier], max_score: u8) -> Result<(), TierCoverageError> {
    for score in 0..=max_score {
        match tiers.iter().filter(|t| t.contains(score as usize)).count() {
            0 => return Err(TierCoverageError::Gap(score)),
            1 => {}
            _ => return Err(TierCoverageError::Overlap(score)),
        }
    }
    Ok(())
}

/// Snapshot of a session, suitable for printing as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    pub phase: Phase,
    pub answered_count: usize,
    pub yes_count: usize,
    pub progress_percent: f64,
    pub answers: Vec<AnswerSummary>,
    /// Present only once results have been revealed.
    pub tier: Option<&'static ScoreTier>,
}

impl QuizSummary {
    pub fn to_json(&self) -> Result<String, QuizError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerSummary {
    pub id: &'static str,
    pub answer: Option<bool>,
}

impl From<&Question> for AnswerSummary {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            answer: question.answer(),
        }
    }
}

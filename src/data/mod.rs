//! Static quiz content: the question bank and the tier table.
//!
//! Both tables are process-wide constants. Sessions copy the question
//! bank into their own answer slots and only ever borrow the tiers.

mod questions;
mod tiers;

pub use questions::{PAGE_COUNT, QUESTION_BANK, QUESTION_COUNT, QUESTIONS_PER_PAGE, fresh_questions};
pub use tiers::{LOWEST_TIER, SCORE_TIERS};

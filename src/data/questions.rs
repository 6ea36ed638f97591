use crate::models::Question;

pub const QUESTION_COUNT: usize = 10;
pub const PAGE_COUNT: usize = 3;
/// `ceil(10 / 3)`: pages hold 4, 4 and 2 questions.
pub const QUESTIONS_PER_PAGE: usize = QUESTION_COUNT.div_ceil(PAGE_COUNT);

pub static QUESTION_BANK: [Question; QUESTION_COUNT] = [
    Question::unanswered(
        "q1",
        "Can customers clearly see their point balance and rewards status without asking?",
    ),
    Question::unanswered(
        "q2",
        "Do you ever send offers based on a customer's purchase history or preferences?",
    ),
    Question::unanswered(
        "q3",
        "Do you have rewards other than dollars off available to redeem?",
    ),
    Question::unanswered(
        "q4",
        "Can someone sign up for your program in under 30 seconds?",
    ),
    Question::unanswered(
        "q5",
        "Do customers hear from you regularly with loyalty updates via SMS, email, or app?",
    ),
    Question::unanswered(
        "q6",
        "Do you reward people for things beyond purchases\u{2014}like referrals or visit milestones?",
    ),
    Question::unanswered(
        "q7",
        "Do your team members know how the program works and talk about it with customers?",
    ),
    Question::unanswered(
        "q8",
        "Can customers redeem rewards both in-store and on your menu without confusion?",
    ),
    Question::unanswered(
        "q9",
        "Do you look at campaign results or KPIs to improve your loyalty program over time?",
    ),
    Question::unanswered(
        "q10",
        "Has your program been updated or improved in the last 6 months?",
    ),
];

/// A new, unanswered copy of the question bank.
pub fn fresh_questions() -> Vec<Question> {
    QUESTION_BANK.to_vec()
}

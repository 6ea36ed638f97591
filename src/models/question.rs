use serde::Serialize;

/// One yes/no question together with the user's answer, if any.
///
/// `answered` is derived from `answer`, so a question can never be
/// answered without a value or carry a value while unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    answer: Option<bool>,
}

impl Question {
    pub const fn unanswered(id: &'static str, text: &'static str) -> Self {
        Self {
            id,
            text,
            answer: None,
        }
    }

    pub fn answered(&self) -> bool {
        self.answer.is_some()
    }

    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    pub fn is_yes(&self) -> bool {
        self.answer == Some(true)
    }

    pub(crate) fn set_answer(&mut self, value: bool) {
        self.answer = Some(value);
    }
}

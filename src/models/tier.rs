use serde::Serialize;

/// A scoring bracket over the number of "Yes" answers, both bounds inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTier {
    pub min: u8,
    pub max: u8,
    pub description: &'static str,
    pub button_text: &'static str,
}

impl ScoreTier {
    pub fn contains(&self, yes_count: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&yes_count)
    }
}

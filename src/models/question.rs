use serde::{Deserialize, Serialize};

/// Difficulty level of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// A single multiple-choice question.
///
/// Invariant: `correct` indexes into `options`. Enforced when the bank is
/// loaded and preserved by option shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub difficulty: Difficulty,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// Running tally for a practice run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub correct: usize,
    pub incorrect: usize,
}

impl RunStats {
    /// Total answers recorded so far.
    pub fn answered(&self) -> usize {
        self.correct + self.incorrect
    }
}

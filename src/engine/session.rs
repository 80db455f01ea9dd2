use crate::data::QuestionBank;
use crate::engine::shuffle::sample_partition;
use crate::models::{Difficulty, Question};
use crate::storage::{KeyValueStore, LAST_SCORE_KEY};

/// Most questions drawn for one timed session.
pub const SESSION_DRAW_LIMIT: usize = 20;

/// Where a timed session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NameEntry,
    DifficultySelection,
    Answering,
    Result,
}

/// The ephemeral timed quiz.
///
/// Created fresh each play-through and discarded when the view closes.
/// The only thing that outlives it is the final percentage, written to the
/// store when the last question is advanced past.
pub struct SessionQuiz {
    phase: SessionPhase,
    player_name: String,
    difficulty: Option<Difficulty>,
    questions: Vec<Question>,
    current: usize,
    score: usize,
    selected: Option<usize>,
}

impl SessionQuiz {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::NameEntry,
            player_name: String::new(),
            difficulty: None,
            questions: Vec::new(),
            current: 0,
            score: 0,
            selected: None,
        }
    }

    /// Record the player's name and move on to difficulty selection.
    pub fn submit_name(&mut self, name: String) {
        if self.phase != SessionPhase::NameEntry {
            return;
        }
        self.player_name = name;
        self.phase = SessionPhase::DifficultySelection;
    }

    /// Draw a fresh random sample for `difficulty` and begin answering.
    ///
    /// An empty partition is degenerate but valid: the session goes straight
    /// to the result phase with a 0% score.
    pub fn start(
        &mut self,
        difficulty: Difficulty,
        bank: &QuestionBank,
        store: &mut dyn KeyValueStore,
    ) {
        self.questions = sample_partition(bank, difficulty, SESSION_DRAW_LIMIT);
        self.difficulty = Some(difficulty);
        self.current = 0;
        self.score = 0;
        self.selected = None;

        if self.questions.is_empty() {
            self.finish(store);
        } else {
            self.phase = SessionPhase::Answering;
        }
    }

    /// Record an answer for the current question. Ignored if one was
    /// already recorded; the score moves at most once per question.
    pub fn select_answer(&mut self, option: usize) {
        if self.phase != SessionPhase::Answering || self.selected.is_some() {
            return;
        }
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        if option >= question.options.len() {
            return;
        }

        self.selected = Some(option);
        if option == question.correct {
            self.score += 1;
        }
    }

    /// Move to the next question, or finish the session if this was the
    /// last one. Ignored until an answer has been selected.
    pub fn advance(&mut self, store: &mut dyn KeyValueStore) {
        if self.phase != SessionPhase::Answering || self.selected.is_none() {
            return;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
        } else {
            self.finish(store);
        }
    }

    fn finish(&mut self, store: &mut dyn KeyValueStore) {
        store.set(LAST_SCORE_KEY, self.final_percentage().to_string());
        self.phase = SessionPhase::Result;
    }

    /// Discard everything and return to name entry.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Score as a rounded percentage; an empty draw counts as 0%.
    pub fn final_percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }
}

impl Default for SessionQuiz {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashSet;

    fn question(difficulty: Difficulty, id: usize) -> Question {
        Question {
            difficulty,
            prompt: format!("question {}", id),
            options: vec![
                format!("wrong {}-a", id),
                format!("right {}", id),
                format!("wrong {}-b", id),
            ],
            correct: 1,
            explanation: String::new(),
        }
    }

    fn bank_of(easy: usize, medium: usize) -> QuestionBank {
        let mut questions = Vec::new();
        for i in 0..easy {
            questions.push(question(Difficulty::Easy, i));
        }
        for i in 0..medium {
            questions.push(question(Difficulty::Medium, easy + i));
        }
        QuestionBank::new(questions).unwrap()
    }

    fn started(easy: usize, medium: usize) -> (SessionQuiz, MemoryStore) {
        let bank = bank_of(easy, medium);
        let mut store = MemoryStore::new();
        let mut quiz = SessionQuiz::new();
        quiz.submit_name("tester".to_string());
        quiz.start(Difficulty::Easy, &bank, &mut store);
        (quiz, store)
    }

    #[test]
    fn start_draws_whole_small_partition() {
        let (mut quiz, mut store) = started(3, 5);
        assert_eq!(quiz.phase(), SessionPhase::Answering);
        assert_eq!(quiz.total_questions(), 3);

        let mut prompts = HashSet::new();
        for _ in 0..3 {
            let q = quiz.current_question().unwrap();
            assert_eq!(q.difficulty, Difficulty::Easy);
            prompts.insert(q.prompt.clone());
            let correct = q.correct;
            quiz.select_answer(correct);
            quiz.advance(&mut store);
        }
        assert_eq!(prompts.len(), 3);
    }

    #[test]
    fn start_caps_large_partition_at_draw_limit() {
        let (quiz, _) = started(35, 0);
        assert_eq!(quiz.total_questions(), SESSION_DRAW_LIMIT);
    }

    #[test]
    fn empty_partition_goes_straight_to_result_at_zero() {
        let bank = bank_of(0, 4);
        let mut store = MemoryStore::new();
        let mut quiz = SessionQuiz::new();
        quiz.submit_name("tester".to_string());
        quiz.start(Difficulty::Easy, &bank, &mut store);

        assert_eq!(quiz.phase(), SessionPhase::Result);
        assert_eq!(quiz.final_percentage(), 0);
        assert_eq!(store.get(LAST_SCORE_KEY), Some("0".to_string()));
    }

    #[test]
    fn second_selection_for_same_question_is_ignored() {
        let (mut quiz, _) = started(2, 0);
        let correct = quiz.current_question().unwrap().correct;
        let wrong = (correct + 1) % 3;

        quiz.select_answer(wrong);
        assert_eq!(quiz.score(), 0);
        quiz.select_answer(correct);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), Some(wrong));
    }

    #[test]
    fn advance_without_selection_is_ignored() {
        let (mut quiz, mut store) = started(2, 0);
        quiz.advance(&mut store);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.phase(), SessionPhase::Answering);
    }

    #[test]
    fn one_right_one_wrong_scores_fifty_percent() {
        let (mut quiz, mut store) = started(2, 0);

        let correct = quiz.current_question().unwrap().correct;
        quiz.select_answer(correct);
        quiz.advance(&mut store);

        let correct = quiz.current_question().unwrap().correct;
        quiz.select_answer((correct + 1) % 3);
        quiz.advance(&mut store);

        assert_eq!(quiz.phase(), SessionPhase::Result);
        assert_eq!(quiz.final_percentage(), 50);
        assert_eq!(store.get(LAST_SCORE_KEY), Some("50".to_string()));
    }

    #[test]
    fn reset_returns_to_name_entry() {
        let (mut quiz, _) = started(2, 0);
        quiz.reset();
        assert_eq!(quiz.phase(), SessionPhase::NameEntry);
        assert_eq!(quiz.total_questions(), 0);
        assert_eq!(quiz.player_name(), "");
    }
}

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::data::QuestionBank;
use crate::models::{Difficulty, Question};

/// Draw up to `limit` questions of one difficulty, uniformly without
/// replacement: shuffle the partition, take the prefix.
pub fn sample_partition(bank: &QuestionBank, difficulty: Difficulty, limit: usize) -> Vec<Question> {
    let mut drawn: Vec<Question> = bank.partition(difficulty).cloned().collect();
    drawn.shuffle(&mut thread_rng());
    drawn.truncate(limit);
    drawn
}

/// Permute a question's options in place, keeping `correct` pointed at the
/// right answer. Pairs each option text with its correctness flag, shuffles
/// the pairs, then recovers the flagged position.
pub fn shuffle_options(question: &mut Question) {
    let correct = question.correct;
    let mut pairs: Vec<(String, bool)> = question
        .options
        .drain(..)
        .enumerate()
        .map(|(i, text)| (text, i == correct))
        .collect();

    pairs.shuffle(&mut thread_rng());

    question.correct = pairs
        .iter()
        .position(|(_, is_correct)| *is_correct)
        .unwrap_or(0);
    question.options = pairs.into_iter().map(|(text, _)| text).collect();
}

/// Build a fresh practice run over the whole bank: every question's options
/// shuffled and re-indexed, then the question order shuffled.
pub fn shuffled_run(bank: &QuestionBank) -> Vec<Question> {
    let mut questions: Vec<Question> = bank.questions().to_vec();
    for question in &mut questions {
        shuffle_options(question);
    }
    questions.shuffle(&mut thread_rng());
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn question(difficulty: Difficulty, id: usize) -> Question {
        Question {
            difficulty,
            prompt: format!("question {}", id),
            options: vec![
                format!("wrong {}-a", id),
                format!("right {}", id),
                format!("wrong {}-b", id),
                format!("wrong {}-c", id),
            ],
            correct: 1,
            explanation: format!("explanation {}", id),
        }
    }

    fn bank(easy: usize, medium: usize, hard: usize) -> QuestionBank {
        let mut questions = Vec::new();
        for i in 0..easy {
            questions.push(question(Difficulty::Easy, i));
        }
        for i in 0..medium {
            questions.push(question(Difficulty::Medium, easy + i));
        }
        for i in 0..hard {
            questions.push(question(Difficulty::Hard, easy + medium + i));
        }
        QuestionBank::new(questions).unwrap()
    }

    #[test]
    fn sample_takes_whole_partition_when_small() {
        let bank = bank(3, 5, 0);
        let drawn = sample_partition(&bank, Difficulty::Easy, 20);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|q| q.difficulty == Difficulty::Easy));
    }

    #[test]
    fn sample_caps_at_limit_and_has_no_duplicates() {
        let bank = bank(30, 0, 0);
        let drawn = sample_partition(&bank, Difficulty::Easy, 20);
        assert_eq!(drawn.len(), 20);

        let prompts: HashSet<&str> = drawn.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts.len(), 20);
    }

    #[test]
    fn sample_of_empty_partition_is_empty() {
        let bank = bank(3, 0, 0);
        assert!(sample_partition(&bank, Difficulty::Hard, 20).is_empty());
    }

    #[test]
    fn option_shuffle_keeps_correct_index_in_sync() {
        for _ in 0..50 {
            let mut q = question(Difficulty::Easy, 0);
            let before: Vec<String> = q.options.clone();

            shuffle_options(&mut q);

            assert_eq!(q.options[q.correct], "right 0");

            let mut after = q.options.clone();
            let mut expected = before;
            after.sort();
            expected.sort();
            assert_eq!(after, expected);
        }
    }

    #[test]
    fn run_covers_whole_bank_once() {
        let bank = bank(4, 4, 4);
        let run = shuffled_run(&bank);
        assert_eq!(run.len(), 12);

        let prompts: HashSet<&str> = run.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts.len(), 12);

        for q in &run {
            assert!(q.options[q.correct].starts_with("right"));
        }
    }
}

use std::fs;
use std::io;
use std::path::Path;

use crate::models::{Difficulty, Question};

/// Error loading a question bank.
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read.
    Io(io::Error),
    /// File is not valid question JSON.
    Parse(serde_json::Error),
    /// The bank contains no questions.
    Empty,
    /// A question violates the bank invariants (index of the offender
    /// and a description of what is wrong).
    InvalidQuestion { index: usize, reason: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read question file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question file: {}", e),
            LoadError::Empty => write!(f, "question file contains no questions"),
            LoadError::InvalidQuestion { index, reason } => {
                write!(f, "question {} is invalid: {}", index + 1, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// The full fixed set of questions, immutable once loaded.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from pre-validated questions, checking the invariants.
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            validate(index, question)?;
        }
        Ok(Self { questions })
    }

    /// Load a bank from a JSON file containing an array of questions.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        let questions: Vec<Question> = serde_json::from_str(&content)?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions of a single difficulty, in bank order.
    pub fn partition(&self, difficulty: Difficulty) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.difficulty == difficulty)
    }
}

fn validate(index: usize, question: &Question) -> Result<(), LoadError> {
    if question.options.len() < 2 {
        return Err(LoadError::InvalidQuestion {
            index,
            reason: format!("needs at least 2 options, has {}", question.options.len()),
        });
    }
    if question.correct >= question.options.len() {
        return Err(LoadError::InvalidQuestion {
            index,
            reason: format!(
                "correct index {} out of range for {} options",
                question.correct,
                question.options.len()
            ),
        });
    }
    Ok(())
}

mod question;

pub use question::{Difficulty, Question, RunStats};

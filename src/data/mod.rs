mod loader;

pub use loader::{LoadError, QuestionBank};

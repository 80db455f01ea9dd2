//! The two quiz engines and their shared shuffle routines.
//!
//! `session` is the ephemeral timed quiz: a fresh random draw per
//! play-through, nothing kept afterwards except the final percentage.
//! `practice` is the resumable simulator: the whole bank, shuffled once,
//! with position and tally persisted after every change.

mod practice;
mod session;
mod shuffle;

pub use practice::{Advance, PracticeRun};
pub use session::{SessionPhase, SessionQuiz, SESSION_DRAW_LIMIT};
pub use shuffle::{sample_partition, shuffle_options, shuffled_run};

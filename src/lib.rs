//! # exam-trainer
//!
//! A terminal study trainer for exam prep: a timed multiple-choice quiz
//! drawn from a question bank by difficulty, and a resumable practice
//! simulator whose progress survives restarts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use exam_trainer::{Trainer, TrainerError};
//!
//! fn main() -> Result<(), TrainerError> {
//!     let trainer = Trainer::from_files("questions.json", PathBuf::from("trainer_state.json"))?;
//!     trainer.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod engine;
mod models;
mod storage;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use data::{LoadError, QuestionBank};
pub use engine::{Advance, PracticeRun, SessionPhase, SessionQuiz, SESSION_DRAW_LIMIT};
pub use models::{Difficulty, Question, RunStats};
pub use storage::{FileStore, KeyValueStore, MemoryStore, LAST_SCORE_KEY, PRACTICE_STATE_KEY};

/// Error type for trainer operations.
#[derive(Debug)]
pub enum TrainerError {
    /// Error loading the question bank.
    Load(LoadError),
    /// IO error while running the terminal UI.
    Io(io::Error),
}

impl std::fmt::Display for TrainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainerError::Load(e) => write!(f, "Failed to load questions: {}", e),
            TrainerError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TrainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrainerError::Load(e) => Some(e),
            TrainerError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for TrainerError {
    fn from(err: LoadError) -> Self {
        TrainerError::Load(err)
    }
}

impl From<io::Error> for TrainerError {
    fn from(err: io::Error) -> Self {
        TrainerError::Io(err)
    }
}

/// A trainer instance that can be run in the terminal.
pub struct Trainer {
    app: App,
}

impl Trainer {
    /// Create a trainer from an already-loaded bank and store.
    pub fn new(bank: QuestionBank, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            app: App::new(bank, store),
        }
    }

    /// Load the bank from a JSON file and persist state at `state_path`.
    pub fn from_files<P: AsRef<Path>>(
        questions: P,
        state_path: PathBuf,
    ) -> Result<Self, TrainerError> {
        let bank = QuestionBank::from_json(questions)?;
        Ok(Self::new(bank, Box::new(FileStore::open(state_path))))
    }

    /// Run the trainer in the terminal. Takes over the terminal, displays
    /// the UI, and returns when the user quits.
    pub fn run(mut self) -> Result<(), TrainerError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), TrainerError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Home => handle_home_input(app, key),
        Screen::Session => handle_session_input(app, key),
        Screen::Practice => handle_practice_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('1') => {
            app.open_session();
            false
        }
        KeyCode::Char('2') => {
            app.open_practice();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_session_input(app: &mut App, key: KeyCode) -> bool {
    match app.session().phase() {
        SessionPhase::NameEntry => match key {
            KeyCode::Char(c) => app.name_input_push(c),
            KeyCode::Backspace => app.name_input_pop(),
            KeyCode::Enter => app.submit_name(),
            KeyCode::Esc => app.close_session(),
            _ => {}
        },
        SessionPhase::DifficultySelection => match key {
            KeyCode::Char('1') => app.start_session(Difficulty::Easy),
            KeyCode::Char('2') => app.start_session(Difficulty::Medium),
            KeyCode::Char('3') => app.start_session(Difficulty::Hard),
            KeyCode::Down | KeyCode::Char('j') => app.difficulty_next(),
            KeyCode::Up | KeyCode::Char('k') => app.difficulty_previous(),
            KeyCode::Enter => app.start_session_at_cursor(),
            KeyCode::Esc => app.close_session(),
            _ => {}
        },
        SessionPhase::Answering => match key {
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if app.session().selected().is_some() {
                    app.session_advance();
                } else {
                    app.session_select();
                }
            }
            KeyCode::Esc => app.close_session(),
            _ => {}
        },
        SessionPhase::Result => match key {
            KeyCode::Char('r') | KeyCode::Char('R') => app.restart_session(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.close_session(),
            _ => {}
        },
    }
    false
}

fn handle_practice_input(app: &mut App, key: KeyCode) -> bool {
    if app.confirm_reset_pending() {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_practice_reset(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_practice_reset(),
            _ => {}
        }
        return false;
    }

    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.answer_locked() {
                app.practice_advance();
            } else {
                app.practice_select();
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.request_practice_reset(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.close_practice(),
        _ => {}
    }
    false
}

use crate::data::QuestionBank;
use crate::engine::{Advance, PracticeRun, SessionQuiz};
use crate::models::{Difficulty, Question};
use crate::storage::{KeyValueStore, LAST_SCORE_KEY};

const MAX_NAME_LEN: usize = 16;

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Session,
    Practice,
}

/// Shell state: routes key-driven actions into the two engines and holds
/// the bits of view state (cursors, name input, confirmation prompt) that
/// are not the engines' business.
pub struct App {
    pub screen: Screen,
    bank: QuestionBank,
    store: Box<dyn KeyValueStore>,
    session: SessionQuiz,
    practice: Option<PracticeRun>,
    name_input: String,
    difficulty_cursor: usize,
    option_cursor: usize,
    confirm_reset: bool,
}

impl App {
    pub fn new(bank: QuestionBank, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            screen: Screen::Home,
            bank,
            store,
            session: SessionQuiz::new(),
            practice: None,
            name_input: String::new(),
            difficulty_cursor: 0,
            option_cursor: 0,
            confirm_reset: false,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> &SessionQuiz {
        &self.session
    }

    pub fn practice(&self) -> Option<&PracticeRun> {
        self.practice.as_ref()
    }

    /// Last timed-quiz percentage, from the store. Anything unreadable
    /// counts as 0.
    pub fn last_score(&self) -> u32 {
        self.store
            .get(LAST_SCORE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    // --- timed session ---

    pub fn open_session(&mut self) {
        self.session = SessionQuiz::new();
        self.name_input.clear();
        self.difficulty_cursor = 0;
        self.option_cursor = 0;
        self.screen = Screen::Session;
    }

    /// Discard the in-progress session; only the last persisted score
    /// survives it.
    pub fn close_session(&mut self) {
        self.session.reset();
        self.name_input.clear();
        self.screen = Screen::Home;
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn name_input_push(&mut self, c: char) {
        if self.name_input.chars().count() < MAX_NAME_LEN {
            self.name_input.push(c);
        }
    }

    pub fn name_input_pop(&mut self) {
        self.name_input.pop();
    }

    pub fn submit_name(&mut self) {
        let name = self.name_input.trim();
        if name.is_empty() {
            return;
        }
        self.session.submit_name(name.to_string());
    }

    pub fn difficulty_cursor(&self) -> usize {
        self.difficulty_cursor
    }

    pub fn difficulty_next(&mut self) {
        self.difficulty_cursor = (self.difficulty_cursor + 1) % Difficulty::ALL.len();
    }

    pub fn difficulty_previous(&mut self) {
        let n = Difficulty::ALL.len();
        self.difficulty_cursor = (self.difficulty_cursor + n - 1) % n;
    }

    pub fn start_session(&mut self, difficulty: Difficulty) {
        self.option_cursor = 0;
        self.session
            .start(difficulty, &self.bank, &mut *self.store);
    }

    pub fn start_session_at_cursor(&mut self) {
        self.start_session(Difficulty::ALL[self.difficulty_cursor]);
    }

    pub fn session_select(&mut self) {
        self.session.select_answer(self.option_cursor);
    }

    pub fn session_advance(&mut self) {
        self.session.advance(&mut *self.store);
        self.option_cursor = 0;
    }

    pub fn restart_session(&mut self) {
        self.open_session();
    }

    // --- practice simulator ---

    /// Open the practice view, restoring or generating the run on first
    /// use and simply resuming it afterwards.
    pub fn open_practice(&mut self) {
        if let Some(run) = &mut self.practice {
            run.resume();
        } else {
            self.practice = Some(PracticeRun::load_or_init(&self.bank, &mut *self.store));
        }
        self.option_cursor = 0;
        self.confirm_reset = false;
        self.screen = Screen::Practice;
    }

    pub fn close_practice(&mut self) {
        self.confirm_reset = false;
        self.screen = Screen::Home;
    }

    pub fn practice_select(&mut self) {
        if let Some(run) = &mut self.practice {
            run.select_answer(self.option_cursor, &mut *self.store);
        }
    }

    /// Advance the run; completion closes the view.
    pub fn practice_advance(&mut self) {
        let Some(run) = &mut self.practice else {
            return;
        };
        let advance = run.advance(&mut *self.store);
        self.option_cursor = 0;
        if advance == Advance::Completed {
            self.close_practice();
        }
    }

    pub fn confirm_reset_pending(&self) -> bool {
        self.confirm_reset
    }

    pub fn request_practice_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_practice_reset(&mut self) {
        self.confirm_reset = false;
    }

    pub fn confirm_practice_reset(&mut self) {
        if let Some(run) = &mut self.practice {
            run.reset_all(&self.bank, &mut *self.store);
        }
        self.option_cursor = 0;
        self.confirm_reset = false;
    }

    // --- option cursor ---

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    fn visible_question(&self) -> Option<&Question> {
        match self.screen {
            Screen::Session => self.session.current_question(),
            Screen::Practice => self.practice.as_ref().and_then(|r| r.current_question()),
            Screen::Home => None,
        }
    }

    /// Whether the question on screen already has a locked-in answer.
    pub fn answer_locked(&self) -> bool {
        match self.screen {
            Screen::Session => self.session.selected().is_some(),
            Screen::Practice => self
                .practice
                .as_ref()
                .is_some_and(|r| r.selected().is_some()),
            Screen::Home => false,
        }
    }

    pub fn select_next_option(&mut self) {
        if self.answer_locked() {
            return;
        }
        if let Some(n) = self.visible_question().map(|q| q.options.len()) {
            self.option_cursor = (self.option_cursor + 1) % n;
        }
    }

    pub fn select_previous_option(&mut self) {
        if self.answer_locked() {
            return;
        }
        if let Some(n) = self.visible_question().map(|q| q.options.len()) {
            self.option_cursor = (self.option_cursor + n - 1) % n;
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::data::QuestionBank;
use crate::engine::shuffle::shuffled_run;
use crate::models::{Question, RunStats};
use crate::storage::{KeyValueStore, PRACTICE_STATE_KEY};

/// Outcome of advancing past a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// More questions remain.
    Continued,
    /// The last question was just advanced past; the caller should close
    /// the view. The run itself is kept: the index rewinds to 0 but the
    /// shuffle and stats stay, so the same order replays with the tally
    /// still accumulating.
    Completed,
}

/// On-disk shape of a practice run.
#[derive(Serialize, Deserialize)]
struct PersistedRun {
    questions: Vec<Question>,
    idx: usize,
    stats: RunStats,
}

/// The resumable practice simulator.
///
/// Runs over the whole bank (no difficulty filter), question order and
/// option order shuffled once up front. Position and tally are written to
/// the store after every mutation so a restart resumes exactly where the
/// learner left off. The current selection is deliberately not persisted;
/// a reload re-presents the current question unanswered.
pub struct PracticeRun {
    questions: Vec<Question>,
    current: usize,
    stats: RunStats,
    selected: Option<usize>,
}

impl PracticeRun {
    /// Restore a run from the store, or generate and persist a fresh one if
    /// nothing usable is there. A corrupt or schema-mismatched stored value
    /// is treated the same as an absent one.
    pub fn load_or_init(bank: &QuestionBank, store: &mut dyn KeyValueStore) -> Self {
        let restored = store
            .get(PRACTICE_STATE_KEY)
            .and_then(|raw| serde_json::from_str::<PersistedRun>(&raw).ok())
            .filter(|run| !run.questions.is_empty() && run.idx < run.questions.len());

        match restored {
            Some(run) => Self {
                questions: run.questions,
                current: run.idx,
                stats: run.stats,
                selected: None,
            },
            None => {
                let mut run = Self {
                    questions: shuffled_run(bank),
                    current: 0,
                    stats: RunStats::default(),
                    selected: None,
                };
                run.persist(store);
                run
            }
        }
    }

    /// Record an answer for the current question and persist the updated
    /// tally. Further selections are ignored until `advance`; the tally
    /// moves exactly once per delivered answer.
    pub fn select_answer(&mut self, option: usize, store: &mut dyn KeyValueStore) {
        if self.selected.is_some() {
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
            self.stats.correct += 1;
        } else {
            self.stats.incorrect += 1;
        }
        self.persist(store);
    }

    /// Move to the next question. Past the last question the run completes:
    /// the index rewinds to 0 and the caller is told to close the view.
    pub fn advance(&mut self, store: &mut dyn KeyValueStore) -> Advance {
        if self.selected.is_none() {
            return Advance::Continued;
        }
        self.selected = None;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.persist(store);
            Advance::Continued
        } else {
            self.current = 0;
            self.persist(store);
            Advance::Completed
        }
    }

    /// Throw the run away and start over: fresh shuffle, zeroed tally.
    /// Destructive; callers are expected to confirm with the user first.
    pub fn reset_all(&mut self, bank: &QuestionBank, store: &mut dyn KeyValueStore) {
        self.questions = shuffled_run(bank);
        self.current = 0;
        self.stats = RunStats::default();
        self.selected = None;
        self.persist(store);
    }

    /// Reopen at the current position. Nothing is regenerated; only the
    /// unpersisted selection is cleared.
    pub fn resume(&mut self) {
        self.selected = None;
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        let run = PersistedRun {
            questions: self.questions.clone(),
            idx: self.current,
            stats: self.stats,
        };
        if let Ok(raw) = serde_json::to_string(&run) {
            store.set(PRACTICE_STATE_KEY, raw);
        }
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

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use crate::storage::MemoryStore;

    fn bank(size: usize) -> QuestionBank {
        let questions = (0..size)
            .map(|i| Question {
                difficulty: Difficulty::Medium,
                prompt: format!("question {}", i),
                options: vec![
                    format!("wrong {}-a", i),
                    format!("right {}", i),
                    format!("wrong {}-b", i),
                    format!("wrong {}-c", i),
                ],
                correct: 1,
                explanation: format!("explanation {}", i),
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    fn answer_current(run: &mut PracticeRun, correctly: bool, store: &mut MemoryStore) -> Advance {
        let q = run.current_question().unwrap();
        let option = if correctly {
            q.correct
        } else {
            (q.correct + 1) % q.options.len()
        };
        run.select_answer(option, store);
        run.advance(store)
    }

    #[test]
    fn first_launch_generates_and_persists_a_run() {
        let bank = bank(5);
        let mut store = MemoryStore::new();
        let run = PracticeRun::load_or_init(&bank, &mut store);

        assert_eq!(run.total_questions(), 5);
        assert_eq!(run.current_index(), 0);
        assert_eq!(run.stats(), RunStats::default());
        assert!(store.get(PRACTICE_STATE_KEY).is_some());
    }

    #[test]
    fn reload_reproduces_the_run_exactly() {
        let bank = bank(6);
        let mut store = MemoryStore::new();

        let mut run = PracticeRun::load_or_init(&bank, &mut store);
        answer_current(&mut run, true, &mut store);
        answer_current(&mut run, false, &mut store);
        let questions_before = run.questions().to_vec();

        let restored = PracticeRun::load_or_init(&bank, &mut store);
        assert_eq!(restored.questions(), questions_before.as_slice());
        assert_eq!(restored.current_index(), 2);
        assert_eq!(
            restored.stats(),
            RunStats {
                correct: 1,
                incorrect: 1
            }
        );
        assert_eq!(restored.selected(), None);
    }

    #[test]
    fn selection_is_not_persisted() {
        let bank = bank(4);
        let mut store = MemoryStore::new();

        let mut run = PracticeRun::load_or_init(&bank, &mut store);
        run.select_answer(0, &mut store);
        assert!(run.selected().is_some());

        let restored = PracticeRun::load_or_init(&bank, &mut store);
        assert_eq!(restored.selected(), None);
        assert_eq!(restored.current_index(), 0);
    }

    #[test]
    fn repeated_selection_counts_once() {
        let bank = bank(4);
        let mut store = MemoryStore::new();
        let mut run = PracticeRun::load_or_init(&bank, &mut store);

        let correct = run.current_question().unwrap().correct;
        run.select_answer(correct, &mut store);
        run.select_answer(correct, &mut store);
        run.select_answer((correct + 1) % 4, &mut store);

        assert_eq!(
            run.stats(),
            RunStats {
                correct: 1,
                incorrect: 0
            }
        );
        assert_eq!(run.selected(), Some(correct));
    }

    #[test]
    fn advance_before_selection_is_ignored() {
        let bank = bank(4);
        let mut store = MemoryStore::new();
        let mut run = PracticeRun::load_or_init(&bank, &mut store);

        assert_eq!(run.advance(&mut store), Advance::Continued);
        assert_eq!(run.current_index(), 0);
    }

    #[test]
    fn completing_the_run_rewinds_index_but_keeps_shuffle_and_stats() {
        // Completion deliberately leaves the shuffle and tally alone: the
        // same order replays from the top and the tally keeps accumulating.
        // A full reset only happens through reset_all.
        let bank = bank(3);
        let mut store = MemoryStore::new();
        let mut run = PracticeRun::load_or_init(&bank, &mut store);
        let questions_before = run.questions().to_vec();

        assert_eq!(answer_current(&mut run, true, &mut store), Advance::Continued);
        assert_eq!(answer_current(&mut run, true, &mut store), Advance::Continued);
        assert_eq!(answer_current(&mut run, false, &mut store), Advance::Completed);

        assert_eq!(run.current_index(), 0);
        assert_eq!(run.questions(), questions_before.as_slice());
        assert_eq!(
            run.stats(),
            RunStats {
                correct: 2,
                incorrect: 1
            }
        );

        // The persisted snapshot agrees.
        let restored = PracticeRun::load_or_init(&bank, &mut store);
        assert_eq!(restored.current_index(), 0);
        assert_eq!(restored.stats(), run.stats());
    }

    #[test]
    fn reset_all_regenerates_and_zeroes_everything() {
        let bank = bank(30);
        let mut store = MemoryStore::new();
        let mut run = PracticeRun::load_or_init(&bank, &mut store);

        for _ in 0..7 {
            answer_current(&mut run, true, &mut store);
        }
        for _ in 0..3 {
            answer_current(&mut run, false, &mut store);
        }
        let order_before: Vec<String> =
            run.questions().iter().map(|q| q.prompt.clone()).collect();

        run.reset_all(&bank, &mut store);

        assert_eq!(run.current_index(), 0);
        assert_eq!(run.stats(), RunStats::default());
        assert_eq!(run.selected(), None);
        assert_eq!(run.total_questions(), 30);

        // A 30-question reshuffle landing on the identical order is
        // vanishingly unlikely.
        let order_after: Vec<String> =
            run.questions().iter().map(|q| q.prompt.clone()).collect();
        assert_ne!(order_before, order_after);
    }

    #[test]
    fn corrupt_persisted_state_falls_back_to_fresh_run() {
        let bank = bank(5);
        let mut store = MemoryStore::new();
        store.set(PRACTICE_STATE_KEY, "{\"idx\": \"oops\"".to_string());

        let run = PracticeRun::load_or_init(&bank, &mut store);
        assert_eq!(run.total_questions(), 5);
        assert_eq!(run.current_index(), 0);
        assert_eq!(run.stats(), RunStats::default());

        // The fresh run replaced the corrupt value.
        let raw = store.get(PRACTICE_STATE_KEY).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    }

    #[test]
    fn out_of_range_persisted_index_is_treated_as_absent() {
        let bank = bank(5);
        let mut store = MemoryStore::new();

        let run = PracticeRun::load_or_init(&bank, &mut store);
        let mut raw: serde_json::Value =
            serde_json::from_str(&store.get(PRACTICE_STATE_KEY).unwrap()).unwrap();
        raw["idx"] = serde_json::json!(99);
        store.set(PRACTICE_STATE_KEY, raw.to_string());
        drop(run);

        let restored = PracticeRun::load_or_init(&bank, &mut store);
        assert_eq!(restored.current_index(), 0);
    }

    #[test]
    fn resume_only_clears_the_selection() {
        let bank = bank(4);
        let mut store = MemoryStore::new();
        let mut run = PracticeRun::load_or_init(&bank, &mut store);

        answer_current(&mut run, true, &mut store);
        run.select_answer(0, &mut store);
        let questions_before = run.questions().to_vec();
        let stats_before = run.stats();

        run.resume();

        assert_eq!(run.selected(), None);
        assert_eq!(run.current_index(), 1);
        assert_eq!(run.questions(), questions_before.as_slice());
        assert_eq!(run.stats(), stats_before);
    }
}

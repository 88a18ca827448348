//! Interview session: question sequence, cursor state machine, and the
//! per-session answer/feedback stores.
//!
//! The cursor moves through `Empty` → `Active(i)` → `Finished`. `load` is
//! the one transition valid from any state; it always resets. Each `load`
//! also starts a new epoch so evaluation results from a previous question
//! sequence can be recognized and discarded.

use crate::model::Feedback;
use crate::store::{AnswerStore, FeedbackStore};

/// Position of the session within its question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// No questions loaded.
    Empty,
    /// Question at this 0-based index is active.
    Active(usize),
    /// Advanced past the last question. Terminal until the next `load`.
    Finished,
}

/// One interview session: the question sequence, the cursor, and the
/// answer/feedback stores keyed by question text.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<String>,
    cursor: Cursor,
    epoch: u64,
    answers: AnswerStore,
    feedback: FeedbackStore,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            cursor: Cursor::Empty,
            epoch: 0,
            answers: AnswerStore::default(),
            feedback: FeedbackStore::default(),
        }
    }

    /// Load a freshly generated question sequence.
    ///
    /// Valid from any state. Transitions to `Active(0)` if `questions` is
    /// non-empty, else `Empty`; clears the finished state, clears both
    /// stores, and bumps the epoch.
    pub fn load(&mut self, questions: Vec<String>) {
        self.cursor = if questions.is_empty() {
            Cursor::Empty
        } else {
            Cursor::Active(0)
        };
        self.questions = questions;
        self.epoch += 1;
        self.answers.clear();
        self.feedback.clear();
    }

    /// Advance to the next question, or to `Finished` from the last one.
    /// No-op in `Empty` or `Finished`.
    pub fn next(&mut self) {
        if let Cursor::Active(i) = self.cursor {
            self.cursor = if i + 1 < self.questions.len() {
                Cursor::Active(i + 1)
            } else {
                Cursor::Finished
            };
        }
    }

    /// Step back to the previous question. No-op at index 0 or outside
    /// `Active`.
    pub fn previous(&mut self) {
        if let Cursor::Active(i) = self.cursor {
            if i > 0 {
                self.cursor = Cursor::Active(i - 1);
            }
        }
    }

    /// The active question text, or `None` in `Empty`/`Finished`.
    pub fn current(&self) -> Option<&str> {
        match self.cursor {
            Cursor::Active(i) => self.questions.get(i).map(String::as_str),
            _ => None,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == Cursor::Finished
    }

    /// Epoch of the current question sequence. Bumped on every `load`.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 1-based position of the active question, for display.
    pub fn position(&self) -> Option<usize> {
        match self.cursor {
            Cursor::Active(i) => Some(i + 1),
            _ => None,
        }
    }

    /// Record the answer for the currently active question.
    ///
    /// Returns `false` (without mutating) when no question is active.
    pub fn set_answer(&mut self, text: &str) -> bool {
        let question = match self.current() {
            Some(q) => q.to_string(),
            None => return false,
        };
        self.answers.set(&question, text);
        true
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    /// Apply an evaluation result that was started under `epoch`.
    ///
    /// Within the live epoch this is last-write-wins keyed by question: a
    /// result resolving after the user navigated elsewhere still lands on
    /// the question it was started for, and unrelated entries are
    /// untouched. A result from a stale epoch — the question sequence was
    /// regenerated while the call was in flight — is discarded, returning
    /// `false`.
    pub fn apply_feedback(&mut self, epoch: u64, question: &str, feedback: Feedback) -> bool {
        if epoch != self.epoch {
            tracing::warn!(
                stale = epoch,
                live = self.epoch,
                "discarding evaluation result from a stale question sequence"
            );
            return false;
        }
        self.feedback.record(question, feedback);
        true
    }
}

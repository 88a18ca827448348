//! Answer and feedback stores.
//!
//! Both stores are keyed by question text with replace-on-write semantics.
//! A new question generation starts a fresh epoch; `Session::load` clears
//! both stores so entries from a prior sequence cannot leak into the next
//! one's aggregate.

use std::collections::HashMap;

use crate::model::Feedback;

/// Mapping from question text to the user's current answer text.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: HashMap<String, String>,
}

impl AnswerStore {
    /// Replace the stored answer for a question, inserting if absent.
    ///
    /// Empty text is a valid answer; no content validation happens here.
    pub fn set(&mut self, question: &str, text: &str) {
        self.answers.insert(question.to_string(), text.to_string());
    }

    /// The recorded answer, or `None` if the question was never answered.
    ///
    /// Consumers that must distinguish "never answered" from an explicitly
    /// empty answer (the report builder) use this accessor.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    /// The recorded answer, or the empty default if never set.
    pub fn text(&self, question: &str) -> &str {
        self.get(question).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// Mapping from question text to the most recent evaluation result.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    entries: HashMap<String, Feedback>,
}

impl FeedbackStore {
    /// Record feedback for a question, replacing any prior entry.
    ///
    /// Last-write-wins, no merge: re-evaluating a question atomically
    /// replaces its previous feedback from the consumer's point of view.
    pub fn record(&mut self, question: &str, feedback: Feedback) {
        self.entries.insert(question.to_string(), feedback);
    }

    /// The stored feedback, or `None` if the question has not been
    /// evaluated since the last question generation.
    ///
    /// Absence is distinguishable from a zero-score feedback.
    pub fn get(&self, question: &str) -> Option<&Feedback> {
        self.entries.get(question)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

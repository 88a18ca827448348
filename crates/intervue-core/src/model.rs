//! Core data model types for intervue.
//!
//! Skills and questions travel through the system as plain strings: a skill
//! is an opaque tag extracted from the uploaded document, and a question's
//! text doubles as its identifier. `Feedback` is the one structured record,
//! decoded strictly at the collaborator boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation result for a single answered question.
///
/// Every field is required on deserialization — a collaborator response
/// missing one of them is a decode error, not a silent default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Sentiment measure reported by the evaluator, compound-style in [-1, 1].
    pub sentiment: f64,
    /// Fraction of expected keywords found in the answer.
    pub keyword_coverage: f64,
    /// Numeric score for the answer.
    pub score: f64,
    /// Ordered improvement tips.
    pub tips: Vec<String>,
}

impl Feedback {
    /// Human-readable label derived from the numeric sentiment.
    pub fn sentiment_label(&self) -> SentimentLabel {
        if self.sentiment >= 0.1 {
            SentimentLabel::Positive
        } else if self.sentiment <= -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Display label for a feedback's sentiment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

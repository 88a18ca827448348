//! Session report types with JSON persistence.
//!
//! A report is an ordered sequence of blocks, one per question, carrying
//! the answer and feedback when they exist. Rendering decisions (the
//! "no answer" placeholder, omitting absent feedback) happen downstream in
//! intervue-export; the report itself preserves absence as `None`.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Feedback;
use crate::scoring::overall_score;
use crate::session::Session;
use crate::store::{AnswerStore, FeedbackStore};

/// A complete session report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Role label the questions were generated for, if any.
    #[serde(default)]
    pub role: Option<String>,
    /// Skills extracted from the uploaded document.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Average score across evaluated questions, rounded to 2 decimals.
    pub overall_score: f64,
    /// One block per question, in presentation order.
    pub blocks: Vec<ReportBlock>,
}

/// Report entry for a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBlock {
    /// 1-based question number.
    pub number: usize,
    /// Question text.
    pub question: String,
    /// Recorded answer; `None` if the question was never answered.
    /// `Some("")` is a real (empty) answer, distinct from `None`.
    pub answer: Option<String>,
    /// Most recent evaluation; `None` if never evaluated this epoch.
    pub feedback: Option<Feedback>,
}

/// Assemble one block per question, in order, regardless of how many have
/// answers or feedback.
pub fn build_blocks(
    questions: &[String],
    answers: &AnswerStore,
    feedback: &FeedbackStore,
) -> Vec<ReportBlock> {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| ReportBlock {
            number: i + 1,
            question: question.clone(),
            answer: answers.get(question).map(str::to_string),
            feedback: feedback.get(question).cloned(),
        })
        .collect()
}

impl SessionReport {
    /// Build the report for a session's current state.
    pub fn from_session(session: &Session, role: Option<&str>, skills: &[String]) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            role: role.map(str::to_string),
            skills: skills.to_vec(),
            overall_score: overall_score(session.feedback(), session.questions()),
            blocks: build_blocks(session.questions(), session.answers(), session.feedback()),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

//! Interview engine: orchestrates collaborator calls and session state.
//!
//! The engine is the single writer for all session state. Each operation
//! awaits its collaborator call to completion and only then applies the
//! corresponding mutation; on a failed call nothing mutates, so a service
//! error never corrupts the stores.

use std::sync::Arc;

use anyhow::Result;

use crate::model::Feedback;
use crate::report::SessionReport;
use crate::scoring::overall_score;
use crate::session::{Cursor, Session};
use crate::traits::{
    EvaluateRequest, ExtractRequest, GenerateQuestionsRequest, InterviewService,
};

/// Drives one interview session against an `InterviewService` backend.
pub struct InterviewEngine {
    service: Arc<dyn InterviewService>,
    session: Session,
    skills: Vec<String>,
    role: Option<String>,
}

impl InterviewEngine {
    pub fn new(service: Arc<dyn InterviewService>) -> Self {
        Self {
            service,
            session: Session::new(),
            skills: Vec::new(),
            role: None,
        }
    }

    /// Extract skills from an uploaded document, replacing the current
    /// skill list on success.
    ///
    /// An empty document is an input validation failure: reported
    /// immediately, no state mutates.
    pub async fn upload_document(&mut self, file_name: &str, document: &[u8]) -> Result<&[String]> {
        anyhow::ensure!(!document.is_empty(), "no document content to upload");

        let request = ExtractRequest {
            file_name: file_name.to_string(),
            document: document.to_vec(),
        };
        let response = self.service.extract_skills(&request).await?;

        self.skills = response.skills;
        Ok(&self.skills)
    }

    /// Skills extracted by the last successful upload.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Generate a fresh question sequence from the extracted skills and
    /// load it into the session.
    ///
    /// On success the session starts a new epoch: cursor at the first
    /// question, finished flag cleared, both stores emptied. On failure the
    /// session keeps its previous sequence untouched.
    pub async fn generate_questions(&mut self, role: Option<&str>) -> Result<usize> {
        anyhow::ensure!(
            !self.skills.is_empty(),
            "no skills extracted yet; upload a document first"
        );

        let request = GenerateQuestionsRequest {
            skills: self.skills.clone(),
            role: role.map(str::to_string),
        };
        let response = self.service.generate_questions(&request).await?;

        let count = response.questions.len();
        self.role = role.map(str::to_string);
        self.session.load(response.questions);
        Ok(count)
    }

    /// Record the answer for the currently active question.
    pub fn record_answer(&mut self, text: &str) -> Result<()> {
        anyhow::ensure!(
            self.session.set_answer(text),
            "no active question to answer"
        );
        Ok(())
    }

    /// Evaluate the active question's current answer.
    ///
    /// The question, answer, and epoch are snapshotted before the call, so
    /// the result lands on the question it was started for even if the user
    /// navigates away while the call is in flight (last-write-wins, keyed
    /// by question — a documented race, not a bug). A result arriving after
    /// the question sequence was regenerated is discarded instead.
    pub async fn evaluate_current(&mut self) -> Result<&Feedback> {
        let question = self
            .session
            .current()
            .ok_or_else(|| anyhow::anyhow!("no active question to evaluate"))?
            .to_string();
        let epoch = self.session.epoch();

        let request = EvaluateRequest {
            question: question.clone(),
            answer: self.session.answers().text(&question).to_string(),
            expected_keywords: self.skills.clone(),
        };
        let feedback = self.service.evaluate_answer(&request).await?;

        anyhow::ensure!(
            self.session.apply_feedback(epoch, &question, feedback),
            "evaluation result discarded: question sequence changed while the call was in flight"
        );
        Ok(self
            .session
            .feedback()
            .get(&question)
            .expect("feedback recorded above"))
    }

    pub fn next(&mut self) {
        self.session.next();
    }

    pub fn previous(&mut self) {
        self.session.previous();
    }

    pub fn current(&self) -> Option<&str> {
        self.session.current()
    }

    pub fn cursor(&self) -> Cursor {
        self.session.cursor()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Current overall score; pure function of the feedback store.
    pub fn overall_score(&self) -> f64 {
        overall_score(self.session.feedback(), self.session.questions())
    }

    /// Assemble the report for the session's current state.
    pub fn build_report(&self) -> SessionReport {
        SessionReport::from_session(&self.session, self.role.as_deref(), &self.skills)
    }
}

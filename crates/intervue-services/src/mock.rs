//! Mock service for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use intervue_core::model::Feedback;
use intervue_core::traits::{
    EvaluateRequest, ExtractRequest, ExtractResponse, GenerateQuestionsRequest,
    GenerateQuestionsResponse, InterviewService,
};

/// A mock interview service for exercising the engine and CLI without a
/// backend.
///
/// Returns fixed skills and questions, and per-question feedback
/// configured up front.
pub struct MockService {
    skills: Vec<String>,
    questions: Vec<String>,
    /// Map of question text → feedback to return.
    feedback: HashMap<String, Feedback>,
    /// Returned when no configured feedback matches.
    default_feedback: Feedback,
    evaluate_count: AtomicU32,
    /// Last evaluation request received.
    last_evaluate: Mutex<Option<EvaluateRequest>>,
}

impl MockService {
    pub fn new(skills: &[&str], questions: &[&str]) -> Self {
        Self {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            questions: questions.iter().map(|s| s.to_string()).collect(),
            feedback: HashMap::new(),
            default_feedback: Feedback {
                sentiment: 0.0,
                keyword_coverage: 0.0,
                score: 50.0,
                tips: vec![],
            },
            evaluate_count: AtomicU32::new(0),
            last_evaluate: Mutex::new(None),
        }
    }

    /// Configure the feedback returned for one question.
    pub fn with_feedback(mut self, question: &str, feedback: Feedback) -> Self {
        self.feedback.insert(question.to_string(), feedback);
        self
    }

    /// Configure a plain feedback with the given score for one question.
    pub fn with_score(self, question: &str, score: f64) -> Self {
        self.with_feedback(
            question,
            Feedback {
                sentiment: 0.5,
                keyword_coverage: 1.0,
                score,
                tips: vec![],
            },
        )
    }

    /// Number of evaluation calls made.
    pub fn evaluate_count(&self) -> u32 {
        self.evaluate_count.load(Ordering::Relaxed)
    }

    /// The last evaluation request received.
    pub fn last_evaluate(&self) -> Option<EvaluateRequest> {
        self.last_evaluate.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterviewService for MockService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract_skills(&self, _request: &ExtractRequest) -> anyhow::Result<ExtractResponse> {
        Ok(ExtractResponse {
            skills: self.skills.clone(),
        })
    }

    async fn generate_questions(
        &self,
        _request: &GenerateQuestionsRequest,
    ) -> anyhow::Result<GenerateQuestionsResponse> {
        Ok(GenerateQuestionsResponse {
            questions: self.questions.clone(),
        })
    }

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> anyhow::Result<Feedback> {
        self.evaluate_count.fetch_add(1, Ordering::Relaxed);
        *self.last_evaluate.lock().unwrap() = Some(request.clone());

        Ok(self
            .feedback
            .get(&request.question)
            .cloned()
            .unwrap_or_else(|| self.default_feedback.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_feedback() {
        let service = MockService::new(&["python"], &["Q1", "Q2"]).with_score("Q1", 90.0);

        let request = EvaluateRequest {
            question: "Q1".into(),
            answer: "answer".into(),
            expected_keywords: vec![],
        };
        let feedback = service.evaluate_answer(&request).await.unwrap();
        assert_eq!(feedback.score, 90.0);

        let request = EvaluateRequest {
            question: "Q2".into(),
            answer: "answer".into(),
            expected_keywords: vec![],
        };
        let feedback = service.evaluate_answer(&request).await.unwrap();
        assert_eq!(feedback.score, 50.0);

        assert_eq!(service.evaluate_count(), 2);
        assert_eq!(service.last_evaluate().unwrap().question, "Q2");
    }

    #[tokio::test]
    async fn fixed_skills_and_questions() {
        let service = MockService::new(&["python", "sql"], &["Q1"]);

        let skills = service
            .extract_skills(&ExtractRequest {
                file_name: "r.txt".into(),
                document: vec![1, 2, 3],
            })
            .await
            .unwrap();
        assert_eq!(skills.skills, ["python", "sql"]);

        let questions = service
            .generate_questions(&GenerateQuestionsRequest {
                skills: skills.skills,
                role: None,
            })
            .await
            .unwrap();
        assert_eq!(questions.questions, ["Q1"]);
    }
}

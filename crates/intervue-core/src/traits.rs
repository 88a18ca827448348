//! The collaborator trait implemented by interview backends.
//!
//! The three operations — skill extraction, question generation, answer
//! evaluation — are served together by each backend, so they live on one
//! async trait implemented by the `intervue-services` crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::Feedback;

/// Backend serving the three interview collaborator operations.
///
/// Calls are asynchronous and awaited to completion before any session
/// state mutation is applied. A hang in a backend is not the core's
/// failure domain; no timeout is imposed here (implementations set their
/// own transport timeouts).
#[async_trait]
pub trait InterviewService: Send + Sync {
    /// Human-readable backend name (e.g. "remote", "local").
    fn name(&self) -> &str;

    /// Extract skill tags from an uploaded document.
    async fn extract_skills(&self, request: &ExtractRequest) -> anyhow::Result<ExtractResponse>;

    /// Generate an ordered interview question sequence.
    async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> anyhow::Result<GenerateQuestionsResponse>;

    /// Evaluate one answer, producing feedback for its question.
    async fn evaluate_answer(&self, request: &EvaluateRequest) -> anyhow::Result<Feedback>;
}

/// Request to extract skills from raw document bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Original file name, used by backends to pick a parser.
    pub file_name: String,
    /// Raw document bytes.
    pub document: Vec<u8>,
}

/// Ordered skill tags extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
}

/// Request to generate questions from extracted skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    /// Ordered skill tags seeding generation.
    pub skills: Vec<String>,
    /// Optional role label (e.g. "Software Engineer").
    #[serde(default)]
    pub role: Option<String>,
}

/// Ordered question sequence; order is presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

/// Request to evaluate a single answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The question being answered.
    pub question: String,
    /// The user's answer text. Empty is valid.
    pub answer: String,
    /// Keywords the evaluator checks coverage against.
    #[serde(default)]
    pub expected_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_request_serde_roundtrip() {
        let request = EvaluateRequest {
            question: "Tell me about a challenging project.".into(),
            answer: "I led the migration of a Python service.".into(),
            expected_keywords: vec!["python".into(), "sql".into()],
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: EvaluateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.question, request.question);
        assert_eq!(deserialized.expected_keywords.len(), 2);
    }

    #[test]
    fn generate_request_defaults_role() {
        let json = r#"{"skills": ["python"]}"#;
        let request: GenerateQuestionsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role, None);
    }
}

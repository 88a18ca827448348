//! Offline local interview service.
//!
//! Serves all three collaborator operations without a network: skill-bank
//! containment matching for extraction, template-based question
//! generation, and a lexicon scorer for evaluation. Documents are decoded
//! as UTF-8 text (lossily); binary formats are a remote service's concern.

use async_trait::async_trait;

use intervue_core::model::Feedback;
use intervue_core::traits::{
    EvaluateRequest, ExtractRequest, ExtractResponse, GenerateQuestionsRequest,
    GenerateQuestionsResponse, InterviewService,
};

/// Skill tags matched against document text.
const SKILL_BANK: &[&str] = &[
    "python",
    "java",
    "sql",
    "javascript",
    "react",
    "node",
    "django",
    "flask",
    "fastapi",
    "aws",
    "docker",
    "git",
    "linux",
    "data structures",
    "algorithms",
    "machine learning",
    "nlp",
    "pandas",
    "numpy",
    "rest api",
    "mongodb",
    "postgresql",
];

/// At most this many skills get a dedicated question.
const MAX_SKILL_QUESTIONS: usize = 6;

const POSITIVE_WORDS: &[&str] = &[
    "achieved", "confident", "delivered", "effective", "efficient", "great", "improved",
    "led", "reliable", "robust", "strong", "success", "successful", "win",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "blame", "broken", "bug", "difficult", "failed", "failure", "poor", "problem",
    "slow", "weak", "worst",
];

/// Local heuristic interview service.
#[derive(Debug, Default)]
pub struct LocalService;

impl LocalService {
    pub fn new() -> Self {
        Self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lexicon sentiment over the answer words, normalized into [-1, 1].
///
/// A rough stand-in for a full sentiment model: the hit balance is
/// normalized as x / sqrt(x^2 + 15).
fn sentiment(answer: &str) -> f64 {
    let lower = answer.to_lowercase();
    let mut balance = 0.0f64;
    for word in lower.split(|c: char| !c.is_alphanumeric()) {
        if POSITIVE_WORDS.contains(&word) {
            balance += 1.0;
        } else if NEGATIVE_WORDS.contains(&word) {
            balance -= 1.0;
        }
    }

    balance / (balance * balance + 15.0).sqrt()
}

#[async_trait]
impl InterviewService for LocalService {
    fn name(&self) -> &str {
        "local"
    }

    async fn extract_skills(&self, request: &ExtractRequest) -> anyhow::Result<ExtractResponse> {
        let text = String::from_utf8_lossy(&request.document).to_lowercase();

        let mut skills: Vec<String> = SKILL_BANK
            .iter()
            .filter(|skill| text.contains(*skill))
            .map(|skill| skill.to_string())
            .collect();
        skills.sort();

        Ok(ExtractResponse { skills })
    }

    async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> anyhow::Result<GenerateQuestionsResponse> {
        let mut questions = vec![
            "Tell me about a challenging project and your specific impact.".to_string(),
            "Describe a time you received constructive feedback and what you changed."
                .to_string(),
        ];

        for skill in request.skills.iter().take(MAX_SKILL_QUESTIONS) {
            let question = match skill.as_str() {
                "python" | "java" | "javascript" => format!(
                    "In {skill}, how do you manage errors and exceptions in production?"
                ),
                "sql" | "postgresql" | "mongodb" => format!(
                    "Design a schema or query to fetch the top N records efficiently using {skill}."
                ),
                "react" => {
                    "How do you manage state in React across complex components?".to_string()
                }
                "aws" | "docker" => {
                    format!("Walk through deploying a small service with {skill}.")
                }
                "machine learning" | "nlp" | "pandas" | "numpy" => format!(
                    "Explain a pipeline you built using {skill}, and how you validated results."
                ),
                _ => format!("What are best practices you follow when working with {skill}?"),
            };
            questions.push(question);
        }

        if let Some(role) = request.role.as_deref().filter(|r| !r.is_empty()) {
            questions.push(format!("What makes you a fit for the {role} role?"));
        }

        Ok(GenerateQuestionsResponse { questions })
    }

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> anyhow::Result<Feedback> {
        let sentiment = sentiment(&request.answer);

        let answer_lower = request.answer.to_lowercase();
        let keywords: Vec<String> = request
            .expected_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        let hits = keywords
            .iter()
            .filter(|k| answer_lower.contains(k.as_str()))
            .count();
        let keyword_coverage = if keywords.is_empty() {
            0.0
        } else {
            round2(hits as f64 / keywords.len() as f64)
        };

        let mut tips = Vec::new();
        if sentiment < 0.1 {
            tips.push("Sound more confident and positive.".to_string());
        }
        if keyword_coverage < 0.5 && !keywords.is_empty() {
            tips.push(
                "Include more relevant keywords from your resume or the job description."
                    .to_string(),
            );
        }
        if request.answer.split_whitespace().count() < 50 {
            tips.push("Add concrete examples and outcomes (numbers, impact).".to_string());
        }

        let score = round2(0.5 * sentiment.max(0.0) + 0.5 * keyword_coverage);

        Ok(Feedback {
            sentiment,
            keyword_coverage,
            score,
            tips,
        })
    }
}

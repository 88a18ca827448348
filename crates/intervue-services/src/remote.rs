//! Remote HTTP interview service.
//!
//! Talks to an interview API exposing three endpoints: multipart
//! `POST /upload_resume`, form-encoded `POST /generate_questions`, and JSON
//! `POST /evaluate_answer`. Responses are decoded into explicit typed
//! records; a missing required field fails fast as a decode error rather
//! than defaulting.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use intervue_core::error::ServiceError;
use intervue_core::model::Feedback;
use intervue_core::traits::{
    EvaluateRequest, ExtractRequest, ExtractResponse, GenerateQuestionsRequest,
    GenerateQuestionsResponse, InterviewService,
};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// HTTP-backed interview service.
pub struct RemoteService {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteService {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(DEFAULT_TIMEOUT_SECS)
        } else if e.is_connect() {
            ServiceError::NetworkError(format!(
                "interview service not reachable at {}",
                self.base_url
            ))
        } else {
            ServiceError::NetworkError(e.to_string())
        }
    }
}

/// Check the HTTP status, surfacing error bodies as `ApiError`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = response.status().as_u16();
    if status >= 400 {
        let message = response.text().await.unwrap_or_default();
        return Err(ServiceError::ApiError { status, message });
    }
    Ok(response)
}

#[derive(Deserialize)]
struct UploadResponse {
    skills: Vec<String>,
}

#[derive(Deserialize)]
struct QuestionsResponse {
    questions: Vec<String>,
}

#[async_trait]
impl InterviewService for RemoteService {
    fn name(&self) -> &str {
        "remote"
    }

    #[instrument(skip(self, request), fields(file = %request.file_name))]
    async fn extract_skills(&self, request: &ExtractRequest) -> anyhow::Result<ExtractResponse> {
        let part = reqwest::multipart::Part::bytes(request.document.clone())
            .file_name(request.file_name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload_resume", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let response = check_status(response).await?;

        let decoded: UploadResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::DecodeError(format!("upload_resume response: {e}")))?;

        Ok(ExtractResponse {
            skills: decoded.skills,
        })
    }

    #[instrument(skip(self, request), fields(skills = request.skills.len()))]
    async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> anyhow::Result<GenerateQuestionsResponse> {
        // Repeated `skills` form fields, matching the service's contract.
        let mut params: Vec<(&str, &str)> = request
            .skills
            .iter()
            .map(|s| ("skills", s.as_str()))
            .collect();
        params.push(("role", request.role.as_deref().unwrap_or("")));

        let response = self
            .client
            .post(format!("{}/generate_questions", self.base_url))
            .form(&params)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let response = check_status(response).await?;

        let decoded: QuestionsResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::DecodeError(format!("generate_questions response: {e}")))?;

        Ok(GenerateQuestionsResponse {
            questions: decoded.questions,
        })
    }

    #[instrument(skip(self, request), fields(question = %request.question))]
    async fn evaluate_answer(&self, request: &EvaluateRequest) -> anyhow::Result<Feedback> {
        let response = self
            .client
            .post(format!("{}/evaluate_answer", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let response = check_status(response).await?;

        // Feedback's fields are all required; an incomplete payload is a
        // decode error here, never a silent zero.
        let feedback: Feedback = response
            .json()
            .await
            .map_err(|e| ServiceError::DecodeError(format!("evaluate_answer response: {e}")))?;

        Ok(feedback)
    }
}

//! Collaborator error types.
//!
//! These errors represent failures when calling the external interview
//! collaborators (skill extraction, question generation, answer
//! evaluation). Defined in `intervue-core` so the engine can classify
//! failures without string matching. There is no retry policy: a call
//! either succeeds or surfaces one of these to the user, and no session
//! state mutates on failure.

use thiserror::Error;

/// Errors that can occur when calling an interview collaborator.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response was missing a required field or otherwise malformed.
    #[error("failed to decode response: {0}")]
    DecodeError(String),
}

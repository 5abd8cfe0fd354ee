//! Error types for bugforge operations.
//!
//! Only hard failures live here: provider and transport problems that must
//! abort a request. A completion that arrives but does not match the
//! expected shape is never an error; the parsers in [`crate::parser`]
//! resolve those to documented fallback values.

use thiserror::Error;

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: GROQ_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse provider response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while orchestrating a debugging request.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A completion call failed. Any step failing aborts the whole request.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Result type alias for orchestrator operations.
pub type OrchestratorResult<T> = Result<T, OrchestratorError>;

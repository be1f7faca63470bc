use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type. Every pipeline stage returns
/// `Result<T, AppError>`; `main` maps it to a non-zero exit.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Marketplace error: {0}")]
    Marketplace(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model response had no locatable JSON array, or the array did not
    /// decode. Fatal for the whole run — no partial-batch retry.
    #[error("Model response parse error: {0}")]
    ModelParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

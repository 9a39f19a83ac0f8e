use async_trait::async_trait;
use thiserror::Error;

use crate::GenerateResponse;

/// Errors that can occur while talking to the hosted model
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Failed to initialize inference client: {0}")]
    ClientInit(String),

    #[error("Generation request failed: {0}")]
    Generation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// The seam between the assessment client and the hosted endpoint.
///
/// One implementation talks to the real API; tests substitute a stub that
/// returns canned responses.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Human-readable name of the backend (e.g., "Gemini")
    fn name(&self) -> &str;

    /// The model identifier this backend is bound to
    fn model(&self) -> &str;

    /// Submit a prompt as a single user turn and return the raw response
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, LlmError>;
}

//! # diffsentry-llm
//!
//! Prompt construction and hosted model access for diffsentry.
//!
//! The diff and the rule corpus are formatted into a single fixed-template
//! prompt, submitted to a hosted text-generation endpoint as one
//! user-authored turn, and the textual parts of the first response
//! candidate become the assessment.
//!
//! ## Key Types
//!
//! - [`AssessmentPrompts`] - Fixed prompt template
//! - [`AssessmentClient`] - Submits a prompt, extracts the assessment
//! - [`InferenceBackend`] - Seam for the hosted endpoint (stubbed in tests)
//! - [`GeminiBackend`] - Production backend for the Gemini API
//! - [`Verdict`] - Classification of the assessment's leading token
//!
//! There is no retry, no backoff, and no streaming: a single best-effort
//! call per run.

mod client;
mod gemini;
mod prompts;
mod response;
mod traits;
mod verdict;

pub use client::AssessmentClient;
pub use gemini::{GeminiBackend, DEFAULT_MODEL};
pub use prompts::AssessmentPrompts;
pub use response::{Candidate, Content, GenerateResponse, Part};
pub use traits::{InferenceBackend, LlmError};
pub use verdict::Verdict;

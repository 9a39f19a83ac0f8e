use serde::Serialize;

use diffsentry_llm::Verdict;

/// The final result of a check run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Full assessment text returned by the model
    pub assessment: String,
    /// Classification of the assessment's leading token
    pub verdict: Verdict,
    /// Model that produced the assessment
    pub model: String,
    /// Size of the retrieved diff in bytes
    pub diff_bytes: usize,
    /// Number of rule documents that went into the prompt
    pub rule_files: usize,
    /// Wall-clock duration of the whole check
    pub duration_secs: f64,
}

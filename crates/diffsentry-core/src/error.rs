use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Diff retrieval error: {0}")]
    Diff(#[from] diffsentry_git::DiffError),

    #[error("Rules error: {0}")]
    Rules(#[from] diffsentry_rules::RulesError),

    #[error("Assessment error: {0}")]
    Llm(#[from] diffsentry_llm::LlmError),
}

impl CheckError {
    /// Name of the pipeline stage that failed, for logging
    pub fn stage(&self) -> &'static str {
        match self {
            CheckError::Diff(_) => "diff retrieval",
            CheckError::Rules(_) => "rule loading",
            CheckError::Llm(_) => "assessment",
        }
    }
}

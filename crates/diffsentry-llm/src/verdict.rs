use serde::{Deserialize, Serialize};

/// Classification of an assessment by its leading verdict token.
///
/// The model is instructed to start its reply with one of the two tokens;
/// nothing stronger is enforced. The verdict is informational only and
/// never affects the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Compliant,
    NonCompliant,
    /// The model did not honor the prefix convention
    Unspecified,
}

impl Verdict {
    /// Classify an assessment by its first token, ignoring leading
    /// whitespace.
    pub fn parse(assessment: &str) -> Self {
        let trimmed = assessment.trim_start();
        if trimmed.starts_with("NON-COMPLIANT") {
            Verdict::NonCompliant
        } else if trimmed.starts_with("COMPLIANT") {
            Verdict::Compliant
        } else {
            Verdict::Unspecified
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Compliant => write!(f, "COMPLIANT"),
            Verdict::NonCompliant => write!(f, "NON-COMPLIANT"),
            Verdict::Unspecified => write!(f, "UNSPECIFIED"),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Response from a text-generation call, in the endpoint's
/// candidates-of-parts shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One alternative response; only the first is ever consumed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Convenience constructor for a single-text response
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
            }],
        }
    }
}

use tracing::debug;

use crate::{InferenceBackend, LlmError};

/// Submits prompts to an inference backend and extracts the assessment text
pub struct AssessmentClient {
    backend: Box<dyn InferenceBackend>,
}

impl AssessmentClient {
    pub fn new(backend: Box<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// Send the prompt and return the concatenated text parts of the
    /// first response candidate, in order.
    pub async fn assess(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(
            backend = self.backend.name(),
            model = self.backend.model(),
            prompt_len = prompt.len(),
            "Requesting assessment"
        );

        let response = self.backend.generate(prompt).await?;

        let candidate = response.candidates.first().ok_or(LlmError::EmptyResponse)?;
        let content = candidate.content.as_ref().ok_or(LlmError::EmptyResponse)?;
        if content.parts.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        let mut assessment = String::new();
        for part in &content.parts {
            if let Some(ref text) = part.text {
                assessment.push_str(text);
            }
        }

        if assessment.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        debug!(assessment_len = assessment.len(), "Received assessment");

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Candidate, Content, GenerateResponse, Part};
    use async_trait::async_trait;

    struct StubBackend {
        response: GenerateResponse,
    }

    #[async_trait]
    impl InferenceBackend for StubBackend {
        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }

        async fn generate(&self, _prompt: &str) -> Result<GenerateResponse, LlmError> {
            Ok(self.response.clone())
        }
    }

    fn client_with(response: GenerateResponse) -> AssessmentClient {
        AssessmentClient::new(Box::new(StubBackend { response }))
    }

    #[tokio::test]
    async fn test_assessment_passes_through() {
        let client = client_with(GenerateResponse::from_text("COMPLIANT: tabs used"));

        let assessment = client.assess("prompt").await.unwrap();

        assert_eq!(assessment, "COMPLIANT: tabs used");
    }

    #[tokio::test]
    async fn test_parts_concatenate_in_order() {
        let client = client_with(GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part {
                            text: Some("COMPLIANT".to_string()),
                        },
                        Part { text: None },
                        Part {
                            text: Some(": looks good".to_string()),
                        },
                    ],
                }),
            }],
        });

        let assessment = client.assess("prompt").await.unwrap();

        assert_eq!(assessment, "COMPLIANT: looks good");
    }

    #[tokio::test]
    async fn test_only_first_candidate_is_used() {
        let client = client_with(GenerateResponse {
            candidates: vec![
                Candidate {
                    content: Some(Content {
                        parts: vec![Part {
                            text: Some("first".to_string()),
                        }],
                    }),
                },
                Candidate {
                    content: Some(Content {
                        parts: vec![Part {
                            text: Some("second".to_string()),
                        }],
                    }),
                },
            ],
        });

        let assessment = client.assess("prompt").await.unwrap();

        assert_eq!(assessment, "first");
    }

    #[tokio::test]
    async fn test_zero_candidates_is_empty_response() {
        let client = client_with(GenerateResponse { candidates: vec![] });

        let err = client.assess("prompt").await.unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_candidate_without_content_is_empty_response() {
        let client = client_with(GenerateResponse {
            candidates: vec![Candidate { content: None }],
        });

        let err = client.assess("prompt").await.unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_zero_parts_is_empty_response() {
        let client = client_with(GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content { parts: vec![] }),
            }],
        });

        let err = client.assess("prompt").await.unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_all_empty_parts_is_empty_response() {
        let client = client_with(GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part { text: None },
                        Part {
                            text: Some(String::new()),
                        },
                    ],
                }),
            }],
        });

        let err = client.assess("prompt").await.unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{GenerateResponse, InferenceBackend, LlmError};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model: balances cost and capability with a large context window
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[allow(dead_code)]
    status: Option<String>,
}

/// Production backend for the Gemini generateContent API
pub struct GeminiBackend {
    http: reqwest::Client,
    model: String,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::ClientInit("API key is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;

        info!(model = %model, "Inference client initialized");

        Ok(Self {
            http,
            model,
            api_key,
        })
    }
}

#[async_trait]
impl InferenceBackend for GeminiBackend {
    fn name(&self) -> &str {
        "Gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);

        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generation request"
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: parsed.error.message,
                });
            }
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| LlmError::Generation(e.to_string()))
    }
}

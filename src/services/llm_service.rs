use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Model request timed out")]
    Timeout,
    #[error("Model API error: {0}")]
    Api(String),
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}

/// Trait for generative-model providers, so handlers can run against
/// fakes in tests.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and return the generated text.
    async fn generate_content(&self, prompt: String) -> Result<String, LlmError>;
}

/// Vertex AI `generateContent` request/response structures.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

/// Vertex AI Gemini provider.
pub struct GeminiProvider {
    endpoint: String,
    access_token: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(
        project_id: &str,
        location: &str,
        model_name: &str,
        access_token: String,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let endpoint = format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project_id}\
             /locations/{location}/publishers/google/models/{model_name}:generateContent"
        );

        Ok(Self {
            endpoint,
            access_token,
            client,
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate_content(&self, prompt: String) -> Result<String, LlmError> {
        info!("Requesting model completion ({} char prompt)", prompt.len());

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| {
                LlmError::InvalidResponse("No candidates in response".to_string())
            })?;

        Ok(text)
    }
}

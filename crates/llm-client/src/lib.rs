//! Language-model client for itinerary narratives.
//!
//! This crate provides a Rust client for the Gemini `generateContent`
//! HTTP endpoint. It handles:
//! - Building the generation request (prompt + sampling settings)
//! - Sending it with the API key header
//! - Extracting the generated text from the first candidate
//!
//! Callers decide how to degrade on error; this crate only reports it.

pub mod prompt;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

pub use prompt::travel_plan_prompt;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Errors that can occur when calling the model service
#[derive(Error, Debug)]
pub enum LlmClientError {
    #[error("Failed to reach model service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Model service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Model service returned no text")]
    EmptyResponse,
}

/// Sampling settings sent with every request
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// Client for the text generation service.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    /// Create a client for `model` authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            generation: GenerationConfig::default(),
        }
    }

    /// Point the client at another endpoint (trailing slash optional).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmClientError> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send `prompt` and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        let url = self.endpoint();
        debug!("Requesting generation from {} ({} prompt chars)", url, prompt.len());

        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: self.generation,
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Model service error {}: {}", status, body);
            return Err(LlmClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed.into_text().ok_or(LlmClientError::EmptyResponse)?;
        info!("Generated {} chars with {}", text.len(), self.model);
        Ok(text)
    }

    /// Generate an itinerary for a trip using the travel-plan prompt.
    pub async fn generate_travel_plan(
        &self,
        destination: &str,
        dates: &str,
        budget: f64,
    ) -> Result<String, LlmClientError> {
        self.generate(&travel_plan_prompt(destination, dates, budget)).await
    }
}

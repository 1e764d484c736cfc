//! Completion providers.
//!
//! The provider boundary is one call: prompt in, raw text out. Parsing the
//! text into a flow's output schema is the flow's job, not the provider's.

use crate::errors::CoachError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

/// Trait for text completion providers.
#[async_trait]
pub trait CoachProviderTrait: Send + Sync {
    /// Send a prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, CoachError>;
}

/// Configuration for the HTTP provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 512,
            temperature: 0.7,
            timeout_secs: 20,
        }
    }
}

// ============================================================================
// Request/response structures (generateContent shape)
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// HTTP provider for a hosted generation endpoint.
pub struct HttpCoachProvider {
    client: Client,
    config: ProviderConfig,
}

impl HttpCoachProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        HttpCoachProvider { client, config }
    }
}

#[async_trait]
impl CoachProviderTrait for HttpCoachProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CoachError> {
        if self.config.api_key.is_empty() {
            return Err(CoachError::MissingApiKey);
        }

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_tokens,
                temperature: self.config.temperature,
            },
        };

        debug!("requesting completion from {}", self.config.model);
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoachError::ProviderStatus(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(CoachError::EmptyCompletion);
        }
        Ok(text)
    }
}

/// Scripted provider for tests: pops canned responses in order, then errors.
#[derive(Default)]
pub struct FakeCoachProvider {
    responses: Mutex<Vec<Result<String, CoachError>>>,
}

impl FakeCoachProvider {
    pub fn with_responses(responses: Vec<Result<String, CoachError>>) -> Self {
        FakeCoachProvider {
            responses: Mutex::new(responses),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_responses(vec![Ok(text.to_string())])
    }

    pub fn failing() -> Self {
        Self::with_responses(vec![Err(CoachError::ProviderStatus(503))])
    }
}

#[async_trait]
impl CoachProviderTrait for FakeCoachProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, CoachError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(CoachError::EmptyCompletion);
        }
        responses.remove(0)
    }
}

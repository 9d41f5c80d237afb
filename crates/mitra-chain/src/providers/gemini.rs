//! Gemini `generateContent` client.
//!
//! Blocking HTTP over reqwest. Safety filtering is switched off for all four
//! harm categories so product questions are never refused as harmful.

use std::time::Duration;

use mitra_core::config::ModelConfig;
use mitra_core::errors::{ChainError, MitraError, MitraResult};
use mitra_core::traits::ILanguageModel;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const BLOCK_NONE: &str = "BLOCK_NONE";

/// Language model backed by the Gemini REST API.
pub struct GeminiModel {
    client: reqwest::blocking::Client,
    model: String,
    endpoint: String,
    api_key: String,
    temperature: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<PartOut<'a>>,
}

#[derive(Debug, Serialize)]
struct PartOut<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartIn>,
}

#[derive(Debug, Deserialize)]
struct PartIn {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiModel {
    pub fn new(model: &str, api_key: String, config: &ModelConfig) -> MitraResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChainError::ModelUnavailable {
                model: model.to_string(),
                reason: format!("client error: {e}"),
            })?;
        Ok(Self {
            client,
            model: model.to_string(),
            endpoint: format!(
                "{}/models/{model}:generateContent",
                config.api_base.trim_end_matches('/')
            ),
            api_key,
            temperature: config.temperature,
        })
    }

    /// Read the API key from the variable named by `config.api_key_env`.
    pub fn from_env(model: &str, config: &ModelConfig) -> MitraResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            MitraError::ConfigError(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;
        Self::new(model, api_key, config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn unavailable(&self, reason: String) -> MitraError {
        ChainError::ModelUnavailable {
            model: self.model.clone(),
            reason,
        }
        .into()
    }
}

impl ILanguageModel for GeminiModel {
    fn generate(&self, prompt: &str) -> MitraResult<String> {
        let body = request_body(prompt, self.temperature)?;
        debug!(model = %self.model, prompt_chars = prompt.len(), "gemini request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| self.unavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ChainError::RateLimited {
                model: self.model.clone(),
            }
            .into());
        }
        let text = response
            .text()
            .map_err(|e| self.unavailable(format!("reading body failed: {e}")))?;
        if !status.is_success() {
            return Err(self.unavailable(format!("HTTP {status}: {text}")));
        }
        parse_response(&text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// JSON body for a single-turn `generateContent` call.
pub fn request_body(prompt: &str, temperature: f64) -> MitraResult<String> {
    let request = GenerateRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![PartOut { text: prompt }],
        }],
        generation_config: GenerationConfig { temperature },
        safety_settings: HARM_CATEGORIES
            .iter()
            .map(|&category| SafetySetting {
                category,
                threshold: BLOCK_NONE,
            })
            .collect(),
    };
    Ok(serde_json::to_string(&request)?)
}

/// Text of the first candidate, its parts concatenated.
pub fn parse_response(body: &str) -> MitraResult<String> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ChainError::MalformedResponse {
            reason: format!("invalid JSON: {e}"),
        })?;

    let Some(candidate) = parsed.candidates.into_iter().next() else {
        let reason = match parsed.prompt_feedback.and_then(|f| f.block_reason) {
            Some(block) => format!("no candidates, prompt blocked: {block}"),
            None => "no candidates".to_string(),
        };
        return Err(ChainError::MalformedResponse { reason }.into());
    };

    let texts: Vec<String> = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if texts.is_empty() {
        return Err(ChainError::MalformedResponse {
            reason: "candidate has no text parts".to_string(),
        }
        .into());
    }
    Ok(texts.concat())
}

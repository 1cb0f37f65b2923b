//! Client for the Gemini `generateContent` API.

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

/// Something that can turn a single prompt into generated text.
///
/// `Ok(None)` means the provider answered successfully but produced no text.
pub trait TextGenerator: Send + Sync {
    fn generate_content(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    candidate_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` when the provider returned nothing usable.
    fn into_text(self) -> Result<Option<String>> {
        if self.candidates.is_empty()
            && let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason)
        {
            return Err(BotError::GeminiBlocked(reason));
        }

        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty());

        Ok(text)
    }
}

/// Pulls the human-readable message out of a Gemini error body, falling back to the raw body.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body,
    }
}

pub struct GeminiClient {
    api_key: String,
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_base: &str, model: &str) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{model}:generateContent",
            api_base.trim_end_matches('/')
        );
        Self {
            api_key,
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl TextGenerator for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<Option<String>> {
        debug!(
            "Sending {} character prompt to Gemini at {}",
            prompt.chars().count(),
            self.endpoint
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig { candidate_count: 1 },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::GeminiApi {
                status,
                message: error_message(body),
            });
        }

        let api_response: GenerateContentResponse = response.json().await?;
        debug!(
            "Received {} candidates from Gemini",
            api_response.candidates.len()
        );
        api_response.into_text()
    }
}

//! Native client for the Gemini `generateContent` REST endpoint.

use super::client::LlmClient;
use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
    #[serde(default)]
    response_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
    #[serde(default)]
    index: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig, api_key: &str) -> Self {
        let base_url = if config.base_url.is_empty() {
            DEFAULT_GEMINI_BASE_URL
        } else {
            config.base_url.trim_end_matches('/')
        };

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        // generateContent only knows "user" and "model" turns.
        let role = match message.role.as_str() {
            "assistant" => "model",
            _ => "user",
        };
        Content {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: Some(message.content.clone()),
            }],
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Calling Gemini model {} with {} messages",
            request.model,
            request.messages.len()
        );

        let generation_config = if request.temperature.is_some() || request.max_tokens.is_some() {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            })
        } else {
            None
        };

        let body = GenerateContentRequest {
            contents: request.messages.iter().map(Content::from).collect(),
            generation_config,
        };

        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
                Ok(envelope) => {
                    warn!(
                        "Gemini returned {} ({})",
                        status,
                        envelope.error.status.as_deref().unwrap_or("unknown")
                    );
                    envelope.error.message
                }
                Err(_) => format!("Gemini request failed with status {}", status),
            };
            return Err(Error::provider(message));
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        if parsed.candidates.is_empty() {
            if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(Error::provider(format!("Response was blocked: {}", reason)));
            }
        }

        let choices: Vec<Choice> = parsed
            .candidates
            .into_iter()
            .enumerate()
            .map(|(position, candidate)| {
                let text: String = candidate
                    .content
                    .map(|content| {
                        content
                            .parts
                            .into_iter()
                            .filter_map(|part| part.text)
                            .collect()
                    })
                    .unwrap_or_default();

                Choice {
                    index: candidate.index.unwrap_or(position as u32),
                    message: ChatMessage::assistant(text),
                    finish_reason: candidate.finish_reason,
                }
            })
            .collect();

        debug!("Gemini returned {} candidates", choices.len());

        // An empty candidate that stopped for any reason but STOP was filtered
        if let Some(first) = choices.first() {
            if first.message.content.is_empty() {
                if let Some(reason) = first.finish_reason.as_deref().filter(|r| *r != "STOP") {
                    return Err(Error::provider(format!("Response was blocked: {}", reason)));
                }
            }
        }

        let usage = parsed.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(ChatCompletionResponse {
            id: parsed.response_id.unwrap_or_default(),
            model: parsed.model_version.unwrap_or(request.model),
            choices,
            usage,
        })
    }
}

use super::{Doubt, Subject, build_prompt};
use crate::{
    Error, Result,
    config::{LlmConfig, TutorConfig},
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, create_llm_client},
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns a student's doubt into a single provider call.
///
/// A relay built without a credential still answers every call, always with
/// [`Error::MissingApiKey`] and without touching the network.
pub struct DoubtRelay {
    client: Option<Arc<dyn LlmClient>>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    tutor: TutorConfig,
}

impl DoubtRelay {
    pub fn new(client: Option<Arc<dyn LlmClient>>, llm: &LlmConfig, tutor: TutorConfig) -> Self {
        Self {
            client,
            model: llm.model.clone(),
            temperature: llm.temperature,
            max_tokens: llm.max_tokens,
            tutor,
        }
    }

    pub fn from_config(llm: &LlmConfig, tutor: TutorConfig) -> Self {
        let client = match llm.api_key() {
            Some(key) => {
                info!("Using {:?} provider with model {}", llm.provider, llm.model);
                Some(create_llm_client(llm, key))
            }
            None => {
                warn!(
                    "{} is not set; chat requests will fail until it is configured",
                    llm.api_key_env
                );
                None
            }
        };

        Self::new(client, llm, tutor)
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Applies the subject policy: unknown or missing subjects become the
    /// configured default.
    pub fn resolve_subject(&self, raw: Option<&str>) -> Subject {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => self.tutor.default_subject,
            Some(name) => name.parse().unwrap_or_else(|_| {
                warn!(
                    "Unknown subject '{}', using {}",
                    name, self.tutor.default_subject
                );
                self.tutor.default_subject
            }),
        }
    }

    /// Answers one doubt. Makes at most one provider call.
    pub async fn ask(&self, doubt: &Doubt) -> Result<String> {
        let Some(client) = self.client.as_ref() else {
            error!("Rejecting doubt: provider credential is not configured");
            return Err(Error::MissingApiKey);
        };

        self.validate(doubt)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(build_prompt(doubt.subject, &doubt.text))],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("Relaying {} doubt to model {}", doubt.subject, self.model);

        let response = client.create_chat_completion(request).await?;

        match response.text() {
            Some(text) => Ok(text.to_string()),
            None => Err(Error::provider("Provider returned an empty answer")),
        }
    }

    fn validate(&self, doubt: &Doubt) -> Result<()> {
        if doubt.text.trim().is_empty() {
            return Err(Error::invalid_request("Doubt must not be empty"));
        }

        let length = doubt.text.chars().count();
        if length > self.tutor.max_doubt_chars {
            return Err(Error::invalid_request(format!(
                "Doubt is too long ({} characters, limit {})",
                length, self.tutor.max_doubt_chars
            )));
        }

        Ok(())
    }
}

//! HTTP client for the relay endpoint and an in-memory chat session on top of it.

use crate::{
    server::types::{ChatRequest, ChatResponse},
    tutor::{Conversation, Subject, Turn},
    Error, Result,
};
use tracing::{debug, error};

/// Shown in place of an answer when the relay reports a failure.
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", server_url.trim_end_matches('/')),
        }
    }

    pub async fn ask(&self, doubt: &str, subject: Subject) -> Result<String> {
        let request = ChatRequest {
            doubt: doubt.to_string(),
            subject: Some(subject.to_string()),
        };

        debug!("Posting doubt to {}", self.endpoint);

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body: ChatResponse = response.json().await.map_err(|e| {
            Error::provider(format!("Unexpected reply from relay ({}): {}", status, e))
        })?;

        match body.error {
            Some(message) if !message.is_empty() => Err(Error::provider(message)),
            _ => Ok(body.response),
        }
    }
}

/// A student's chat with the tutor. Follow-ups reuse the first doubt's subject.
pub struct ChatSession {
    client: RelayClient,
    conversation: Conversation,
}

impl ChatSession {
    pub fn new(client: RelayClient, subject: Subject) -> Self {
        Self {
            client,
            conversation: Conversation::new(subject),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Sends one message and returns the tutor's reply turn.
    ///
    /// Blank input is ignored and yields `None`.
    pub async fn send(&mut self, text: &str) -> Option<&Turn> {
        if text.trim().is_empty() {
            return None;
        }

        self.conversation.push_student(text);

        let reply = match self.client.ask(text, self.conversation.subject()).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Relay request failed: {}", e);
                APOLOGY_MESSAGE.to_string()
            }
        };

        Some(self.conversation.push_ai(reply))
    }
}

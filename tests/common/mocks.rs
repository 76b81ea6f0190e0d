use async_trait::async_trait;
use tutor_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that records every request it receives
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub answer: Option<String>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            answer: None,
            requests: Arc::new(Mutex::new(Vec::new())),
            error: Some(error.to_string()),
        }
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::provider(error.clone()));
        }

        Ok(create_mock_chat_response(
            self.answer.as_deref().unwrap_or_default(),
        ))
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "mock-response".to_string(),
        model: "gemini-2.0-flash".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("STOP".to_string()),
        }],
        usage: None,
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub doubt: String,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Body of every `/api/chat` reply. `error` is omitted on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn answer(response: String) -> Self {
        Self {
            response,
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            response: String::new(),
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider_configured: bool,
}

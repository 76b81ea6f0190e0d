use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned when a provider failure carries no usable text.
pub const FALLBACK_PROVIDER_MESSAGE: &str = "Failed to get AI response. Please try again.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// HTTP status used when this error ends a chat request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of a failed chat response.
    ///
    /// Provider failures expose the provider's own message when there is one
    /// and fall back to [`FALLBACK_PROVIDER_MESSAGE`] otherwise.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::MissingApiKey => return self.to_string(),
            Self::Provider(msg) | Self::InvalidRequest(msg) | Self::Config(msg) => msg.clone(),
            Self::OpenAi(async_openai::error::OpenAIError::ApiError(api)) => api.message.clone(),
            Self::OpenAi(e) => e.to_string(),
            Self::Network(e) => e.to_string(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            FALLBACK_PROVIDER_MESSAGE.to_string()
        } else {
            message
        }
    }
}

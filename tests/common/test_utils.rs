use super::mocks::MockLlmClient;
use axum::Router;
use std::sync::Arc;
use tutor_relay::{
    config::{Config, LlmConfig, ProviderKind},
    server::{self, AppState},
    tutor::DoubtRelay,
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config
}

/// LLM configuration pointing a native Gemini client at `base_url`
pub fn gemini_config(base_url: &str, api_key: Option<&str>) -> LlmConfig {
    LlmConfig {
        provider: ProviderKind::Gemini,
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        ..LlmConfig::default()
    }
}

/// LLM configuration pointing the OpenAI-compatible client at `base_url`
pub fn openai_config(base_url: &str, api_key: Option<&str>) -> LlmConfig {
    LlmConfig {
        provider: ProviderKind::Openai,
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        ..LlmConfig::default()
    }
}

/// Router backed by the given mock provider
pub fn create_test_app(mock: MockLlmClient) -> Router {
    let config = create_test_config();
    let relay = DoubtRelay::new(Some(Arc::new(mock)), &config.llm, config.tutor);
    app_for(relay)
}

/// Router whose relay has no credential
pub fn create_unconfigured_app() -> Router {
    let config = create_test_config();
    app_for(DoubtRelay::from_config(&config.llm, config.tutor))
}

pub fn app_for(relay: DoubtRelay) -> Router {
    server::router(AppState {
        relay: Arc::new(relay),
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: "debug"

llm:
  provider: "openai"
  base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
  api_key_env: "TUTOR_TEST_KEY"
  model: "gemini-2.0-flash"
  temperature: 0.4
  max_tokens: 512

tutor:
  default_subject: "Social Studies"
  max_doubt_chars: 2000
"#;

/// Configuration that only names the server section
pub const MINIMAL_CONFIG_YAML: &str = r#"
server:
  port: 9090
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

llm:
  provider: "unknown"
"#;

use serde::{Deserialize, Serialize};

use super::AdvisoryError;
use crate::config::AdvisoryConfig;

/// Chat completion client abstraction (allows mocking).
pub trait ChatClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, AdvisoryError>;
}

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct OpenAiChatClient {
    base_url: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl OpenAiChatClient {
    pub fn new(config: &AdvisoryConfig) -> Result<Self, AdvisoryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisoryError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl ChatClient for OpenAiChatClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, AdvisoryError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AdvisoryError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AdvisoryError::Timeout(self.timeout_secs)
                } else {
                    AdvisoryError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdvisoryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AdvisoryError::MalformedResponse("response has no choices".to_string()))
    }
}

/// Stand-in used when no API key is configured. Every call fails with
/// the configuration reason, which the advisory stage degrades into an
/// `Advisory::Unavailable` marker.
pub struct UnconfiguredChatClient {
    reason: String,
}

impl UnconfiguredChatClient {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl ChatClient for UnconfiguredChatClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::NotConfigured(self.reason.clone()))
    }
}

/// Mock chat client for testing — returns a configurable response.
pub struct MockChatClient {
    response: String,
}

impl MockChatClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl ChatClient for MockChatClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, AdvisoryError> {
        Ok(self.response.clone())
    }
}

/// Mock chat client that always fails — exercises degradation paths.
pub struct FailingChatClient {
    message: String,
}

impl FailingChatClient {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl ChatClient for FailingChatClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::Http(self.message.clone()))
    }
}

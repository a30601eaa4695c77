use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;

use crate::error::{NotesError, Result};
use crate::notes::SYSTEM_PROMPT;

pub const DEFAULT_MAX_TOKENS: u32 = 3000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// A text-generation backend that answers one prompt with raw text.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends `prompt` as the user message and returns the first choice's text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Fixed parameters for every completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl CompletionSettings {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Full chat completions URL, tolerating endpoints that already end in `/v1`.
    pub fn chat_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{base}/chat/completions")
        } else {
            format!("{base}/v1/chat/completions")
        }
    }
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Client for OpenAI-compatible chat completion endpoints.
pub struct OpenAiClient {
    client: Client,
    settings: CompletionSettings,
}

impl OpenAiClient {
    pub fn new(settings: CompletionSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| NotesError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, settings })
    }

    pub const fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(prompt),
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionModel for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.settings.chat_url();
        let chat_request = self.build_request(prompt);

        log::info!("Calling model {:?} at {url}", self.settings.model);

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.settings.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_timeout() {
                NotesError::Upstream(format!("Request to {url} timed out"))
            } else {
                NotesError::Upstream(format!("Failed to connect to API endpoint: {url}: {e}"))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotesError::Upstream(format!(
                "API request failed with status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NotesError::Upstream(format!("Failed to read API response: {e}")))?;

        extract_content(&body)
    }
}

/// Returns the first choice's message text from a chat completion body.
fn extract_content(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| NotesError::Upstream(format!("Failed to parse API response: {e}")))?;

    if let Some(usage) = &parsed.usage {
        log::debug!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| NotesError::Upstream("No choices returned from API".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_appends_v1() {
        let settings = CompletionSettings::new("https://api.openai.com/", "gpt-4o");
        assert_eq!(
            settings.chat_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_url_keeps_existing_v1() {
        let settings = CompletionSettings::new("http://localhost:11434/v1", "llama3.2");
        assert_eq!(
            settings.chat_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_settings_defaults() {
        let settings = CompletionSettings::new("http://x", "m");
        assert_eq!(settings.max_tokens, 3000);
        assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.timeout, Duration::from_secs(120));
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_request_shape() {
        let client = OpenAiClient::new(CompletionSettings::new("http://x", "gpt-4o")).unwrap();
        let request = client.build_request("Translate these notes");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 3000);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Translate these notes");
    }

    #[test]
    fn test_extract_content_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"<en_release_notes>Hi</en_release_notes>"}},{"message":{"content":"ignored"}}],"usage":{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}"#;
        assert_eq!(
            extract_content(body).unwrap(),
            "<en_release_notes>Hi</en_release_notes>"
        );
    }

    #[test]
    fn test_extract_content_null_is_empty() {
        let body = r#"{"choices":[{"message":{"content":null}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "");
    }

    #[test]
    fn test_extract_content_no_choices() {
        let err = extract_content(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, NotesError::Upstream(_)));
        assert!(err.to_string().contains("No choices"));
    }

    #[test]
    fn test_extract_content_invalid_json() {
        let err = extract_content("not json").unwrap_err();
        assert!(matches!(err, NotesError::Upstream(_)));
    }
}

//! HTTP client for the DeepSeek chat-completion API.
//!
//! Wraps `reqwest` with provider-specific error handling and typed envelope
//! deserialization. The OpenAI-compatible response is unwrapped down to the
//! assistant message text; prompt construction and content parsing live in
//! [`crate::ContentGenerator`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ContentError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Client for the DeepSeek chat-completion API.
///
/// Manages the HTTP client, API key, model id, and base URL. Use
/// [`DeepseekClient::new`] for production or [`DeepseekClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug)]
pub struct DeepseekClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl DeepseekClient {
    /// Creates a new client pointed at the production DeepSeek API.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ContentError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ContentError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("hivecast/0.1 (content-automation)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ContentError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Submits a two-message conversation and returns the assistant's reply
    /// text verbatim.
    ///
    /// # Errors
    ///
    /// - [`ContentError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ContentError::Deserialize`] if the envelope is not valid JSON of
    ///   the expected shape.
    /// - [`ContentError::Api`] if the envelope contains no choices.
    pub async fn chat_completion(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ContentError> {
        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|e| ContentError::Api(format!("invalid endpoint: {e}")))?;

        let request = ChatRequest {
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
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ContentError::Deserialize {
                context: "chat completion envelope".to_string(),
                source: e,
            })?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ContentError::Api("completion returned no choices".to_string()))
    }
}

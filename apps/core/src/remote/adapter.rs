//! Remote generation adapter over an OpenAI-compatible chat-completion API.
//!
//! One request per suggestion: the profile is rendered into a single
//! user-role chat turn and sent to `{base}/v1/chat/completions`. The adapter
//! soft-fails at the [`SuggestionSource`] boundary: transport and API
//! failures become display-ready strings, never propagated faults. Callers
//! that want to distinguish outcomes use [`RemoteModelAdapter::complete`]
//! directly.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::{RemoteConfig, REQUEST_TIMEOUT};
use crate::engine::suggestion::SuggestionResult;
use crate::error::AppError;
use crate::profile::ProfileInput;
use crate::source::SuggestionSource;

use super::prompt::build_prompt;

/// Sentinel returned when a well-formed response carries no assistant text.
pub const NO_RESPONSE: &str = "No response";

/// Prefix of the display string substituted for a failed request.
pub const ERROR_PREFIX: &str = "エラー: ";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completion client for the remote suggestion strategy.
pub struct RemoteModelAdapter {
    client: Client,
    config: RemoteConfig,
}

impl RemoteModelAdapter {
    pub fn new(config: RemoteConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Endpoint URL, tolerant of a base that already ends in `/v1`.
    fn api_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        format!("{}/v1/chat/completions", base)
    }

    /// Send one chat-completion request.
    ///
    /// `Ok(Some(text))` is the first choice's assistant content. `Ok(None)`
    /// means the response was well-formed but carried no assistant content
    /// (no choices, a non-assistant role, or a null content field). A single
    /// attempt: no retry, no backoff.
    pub async fn complete(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let url = self.api_url();
        debug!(%url, model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(200).collect();
            return Err(AppError::Remote(format!("HTTP {}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Malformed response: {}", e)))?;

        let choice = match parsed.choices.into_iter().next() {
            Some(choice) => choice,
            None => return Ok(None),
        };

        if choice.message.role != "assistant" {
            return Ok(None);
        }
        Ok(choice.message.content)
    }

    /// Display-ready suggestion text for a profile.
    ///
    /// Always returns a string: the assistant text on success, the
    /// [`NO_RESPONSE`] sentinel for contentless responses, or an
    /// [`ERROR_PREFIX`]-prefixed description on failure.
    pub async fn suggest_for_profile(&self, profile: &ProfileInput) -> String {
        let prompt = build_prompt(profile);

        match self.complete(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_RESPONSE.to_string(),
            Err(e) => {
                error!("remote suggestion failed: {}", e);
                format!("{}{}", ERROR_PREFIX, e)
            }
        }
    }
}

#[async_trait]
impl SuggestionSource for RemoteModelAdapter {
    async fn request_suggestion(&self, profile: &ProfileInput) -> SuggestionResult {
        SuggestionResult {
            message: self.suggest_for_profile(profile).await,
            topics: vec![],
        }
    }
}

//! Environment-based configuration.
//!
//! Read once at startup. Credentials are always injected through the
//! environment; there is no literal default for the API key, and an absent
//! or empty key is a configuration error for the remote backend.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Which suggestion strategy serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Local template engine (default).
    #[default]
    Local,
    /// Remote chat-completion adapter.
    Remote,
}

impl BackendKind {
    /// Parse `MATCHAI_BACKEND` from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("MATCHAI_BACKEND") {
            Err(_) => Ok(Self::Local),
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "" | "local" => Ok(Self::Local),
                "remote" => Ok(Self::Remote),
                other => Err(AppError::Config(format!(
                    "MATCHAI_BACKEND must be 'local' or 'remote', got '{}'",
                    other
                ))),
            },
        }
    }
}

/// Default chat-completion endpoint base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Request timeout for the remote adapter. A single attempt, no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration of the remote generation adapter.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Endpoint base URL, without the `/v1/chat/completions` suffix.
    pub base_url: String,
    /// Bearer credential. Never defaulted.
    pub api_key: String,
    /// Model identifier sent with each request.
    pub model: String,
}

impl RemoteConfig {
    /// Load the remote configuration from the environment.
    ///
    /// `MATCHAI_API_KEY` is mandatory; `MATCHAI_API_BASE` and `MATCHAI_MODEL`
    /// fall back to the OpenAI defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("MATCHAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "MATCHAI_API_KEY is not set. The remote backend cannot run without \
                     an injected credential."
                        .to_string(),
                )
            })?;

        let base_url = env::var("MATCHAI_API_BASE")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let model = env::var("MATCHAI_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            base_url,
            api_key,
            model,
        })
    }
}

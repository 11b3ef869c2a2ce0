use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::llm::utils::string_util::truncate_utf8_with_ellipsis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling knobs sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
        }
    }
}

/// A text-generation backend. Implementations shape the request for their API
/// and reduce the response envelope to plain text.
#[allow(async_fn_in_trait)]
pub trait ProviderClient: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError>;

    fn model_name(&self) -> &str;
}

const ERROR_BODY_MAX_BYTES: usize = 500;

/// Maps a non-success HTTP status to the provider error taxonomy.
pub(crate) fn classify_status(
    brand: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> ProviderError {
    let body = truncate_utf8_with_ellipsis(body.trim(), ERROR_BODY_MAX_BYTES);
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        ProviderError::Auth(format!("{} API error ({}): {}", brand, status, body))
    } else {
        ProviderError::Transport(format!("{} API error ({}): {}", brand, status, body))
    }
}

/// Builds the shared HTTP client; the timeout covers the whole request.
pub(crate) fn build_http_client(timeout_secs: u64) -> anyhow::Result<reqwest::Client> {
    use anyhow::Context;

    reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(timeout_secs.max(1)))
        .tcp_keepalive(std::time::Duration::from_secs(10))
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .build()
        .context("Failed to build HTTP client")
}

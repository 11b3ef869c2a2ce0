use anyhow::Result;

use crate::config::{AppConfig, ProviderConfig};
use crate::cons::provider_cons::LLMProvider;
use crate::error::ProviderError;

use super::claude::ClaudeClient;
use super::openai::OpenAiClient;
pub use super::provider_base::{GenerationOptions, Message, ProviderClient};

pub enum AnyProviderClient {
    Claude(ClaudeClient),
    OpenAI(OpenAiClient),
}

impl AnyProviderClient {
    pub fn provider_kind(&self) -> LLMProvider {
        match self {
            AnyProviderClient::Claude(_) => LLMProvider::Anthropic,
            AnyProviderClient::OpenAI(_) => LLMProvider::OpenAI,
        }
    }
}

impl ProviderClient for AnyProviderClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        match self {
            AnyProviderClient::Claude(c) => c.generate(system_prompt, user_prompt, options).await,
            AnyProviderClient::OpenAI(c) => c.generate(system_prompt, user_prompt, options).await,
        }
    }

    fn model_name(&self) -> &str {
        match self {
            AnyProviderClient::Claude(c) => c.model_name(),
            AnyProviderClient::OpenAI(c) => c.model_name(),
        }
    }
}

pub fn create_client(provider: LLMProvider, config: &ProviderConfig) -> Result<AnyProviderClient> {
    if config.api_key.trim().is_empty() {
        anyhow::bail!("{} API key not configured", provider.brand());
    }

    let client = match provider {
        LLMProvider::Anthropic => AnyProviderClient::Claude(ClaudeClient::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.request_timeout_secs,
        )?),
        LLMProvider::OpenAI => AnyProviderClient::OpenAI(OpenAiClient::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.request_timeout_secs,
        )?),
    };

    log::info!(
        "Initialized {} client with model: {}",
        provider.brand(),
        client.model_name()
    );
    Ok(client)
}

/// Builds the client for the provider selected by `ai_provider`.
pub fn create_client_from_config(config: &AppConfig) -> Result<AnyProviderClient> {
    let provider = config.selected_provider()?;
    create_client(provider, config.provider_config(provider))
}

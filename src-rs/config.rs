use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cons::provider_cons::LLMProvider;
use crate::llm::models::provider_base::GenerationOptions;
use crate::llm::prompts::visualization::VISUALIZATION_PROMPT_VERSION;

const CONFIG_DIR_NAME: &str = ".vislearn";
const CONFIG_FILE_NAME: &str = "vislearn.json";

/// Connection settings for one LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the provider API
    pub base_url: String,

    /// API key for authentication
    #[serde(default)]
    pub api_key: String,

    /// Model name to use
    pub model: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
    pub anthropic: ProviderConfig,
}

/// Sampling options per feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_visualization_options")]
    pub visualization: GenerationOptions,
    #[serde(default = "default_chatbot_options")]
    pub chatbot: GenerationOptions,
}

fn default_visualization_options() -> GenerationOptions {
    GenerationOptions {
        max_tokens: 4000,
        temperature: 0.7,
    }
}

fn default_chatbot_options() -> GenerationOptions {
    GenerationOptions {
        max_tokens: 300,
        temperature: 0.7,
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            visualization: default_visualization_options(),
            chatbot: default_chatbot_options(),
        }
    }
}

/// User override configuration (restricted fields)
#[derive(Debug, Default, Deserialize)]
pub struct UserOverrideConfig {
    #[serde(alias = "aiProvider")]
    pub ai_provider: Option<String>,
    pub debug: Option<bool>,
    pub providers: Option<HashMap<String, UserProviderConfig>>,
}

/// Per-provider patch; every field is optional
#[derive(Debug, Default, Deserialize)]
pub struct UserProviderConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(alias = "model_name")]
    pub model: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl UserProviderConfig {
    fn apply_to(self, target: &mut ProviderConfig) {
        if let Some(v) = self.base_url {
            target.base_url = v;
        }
        if let Some(v) = self.api_key {
            target.api_key = v;
        }
        if let Some(v) = self.model {
            target.model = v;
        }
        if let Some(v) = self.request_timeout_secs {
            target.request_timeout_secs = v;
        }
    }
}

/// Global application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected provider ("openai" or "anthropic")
    #[serde(default = "default_ai_provider")]
    pub ai_provider: String,

    /// Verbose logging and error details in responses
    #[serde(default)]
    pub debug: bool,

    pub providers: ProvidersConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

fn default_ai_provider() -> String {
    "openai".to_string()
}

impl AppConfig {
    /// Load configuration with layered strategy:
    /// 1. Defaults (Embedded Config.toml)
    /// 2. User Config (~/.vislearn/vislearn.json)
    /// 3. Project Config (./.vislearn/vislearn.json)
    /// 4. Environment variables
    pub fn load() -> Result<Self> {
        let user_dir = dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME));
        let project_dir = PathBuf::from(CONFIG_DIR_NAME);
        Self::load_layered(user_dir.as_deref(), &project_dir, |key| std::env::var(key).ok())
    }

    pub(crate) fn load_layered<F>(user_dir: Option<&Path>, project_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::embedded_defaults()?;

        if let Some(dir) = user_dir {
            Self::apply_patch(&mut config, dir.join(CONFIG_FILE_NAME));
        }
        Self::apply_patch(&mut config, project_dir.join(CONFIG_FILE_NAME));
        config.apply_env(env);

        Ok(config)
    }

    pub fn embedded_defaults() -> Result<Self> {
        let default_str = include_str!("../Config.toml");
        toml::from_str(default_str).context("Failed to parse embedded Config.toml")
    }

    pub(crate) fn apply_patch<P: AsRef<Path>>(config: &mut AppConfig, path: P) {
        let path = path.as_ref();
        if !path.exists() {
            return;
        }
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config patch at {}: {}", path.display(), e);
                return;
            }
        };
        match serde_json::from_str::<UserOverrideConfig>(&content) {
            Ok(patch) => config.merge(patch),
            Err(e) => {
                log::warn!("Failed to parse config patch at {}: {}", path.display(), e);
            }
        }
    }

    fn merge(&mut self, patch: UserOverrideConfig) {
        if let Some(provider) = patch.ai_provider {
            self.ai_provider = provider;
        }
        if let Some(debug) = patch.debug {
            self.debug = debug;
        }
        for (name, provider_patch) in patch.providers.unwrap_or_default() {
            match LLMProvider::from_name(&name) {
                Some(p) => provider_patch.apply_to(self.provider_config_mut(p)),
                None => log::warn!("Ignoring config for unknown provider '{}'", name),
            }
        }
    }

    /// Environment overrides, matching the variable names the deployment uses.
    pub(crate) fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("AI_PROVIDER") {
            self.ai_provider = v;
        }
        if let Some(v) = non_empty("DEBUG") {
            self.debug = matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        for (provider, prefix) in [(LLMProvider::OpenAI, "OPENAI"), (LLMProvider::Anthropic, "ANTHROPIC")] {
            let target = self.provider_config_mut(provider);
            if let Some(v) = non_empty(&format!("{}_API_KEY", prefix)) {
                target.api_key = v;
            }
            if let Some(v) = non_empty(&format!("{}_MODEL", prefix)) {
                target.model = v;
            }
            if let Some(v) = non_empty(&format!("{}_BASE_URL", prefix)) {
                target.base_url = v;
            }
        }
    }

    pub fn selected_provider(&self) -> Result<LLMProvider> {
        LLMProvider::from_name(&self.ai_provider)
            .ok_or_else(|| anyhow::anyhow!("Unsupported AI provider: {}", self.ai_provider))
    }

    pub fn provider_config(&self, provider: LLMProvider) -> &ProviderConfig {
        match provider {
            LLMProvider::OpenAI => &self.providers.openai,
            LLMProvider::Anthropic => &self.providers.anthropic,
        }
    }

    fn provider_config_mut(&mut self, provider: LLMProvider) -> &mut ProviderConfig {
        match provider {
            LLMProvider::OpenAI => &mut self.providers.openai,
            LLMProvider::Anthropic => &mut self.providers.anthropic,
        }
    }

    pub fn to_public(&self) -> PublicAppConfig {
        let public_provider = |provider: LLMProvider| {
            let c = self.provider_config(provider);
            PublicProviderConfig {
                name: provider.provider_name().to_string(),
                base_url: c.base_url.clone(),
                model: c.model.clone(),
                has_api_key: !c.api_key.trim().is_empty(),
            }
        };
        PublicAppConfig {
            ai_provider: self.ai_provider.clone(),
            debug: self.debug,
            prompt_version: VISUALIZATION_PROMPT_VERSION.to_string(),
            providers: vec![
                public_provider(LLMProvider::OpenAI),
                public_provider(LLMProvider::Anthropic),
            ],
            generation: self.generation.clone(),
        }
    }
}

/// Configuration as shown to the host; API keys are never included.
#[derive(Debug, Clone, Serialize)]
pub struct PublicAppConfig {
    pub ai_provider: String,
    pub debug: bool,
    pub prompt_version: String,
    pub providers: Vec<PublicProviderConfig>,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicProviderConfig {
    pub name: String,
    pub base_url: String,
    pub model: String,
    pub has_api_key: bool,
}

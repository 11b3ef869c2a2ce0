use anyhow::Result;
use serde_json::{json, Value};

use crate::error::ProviderError;
use crate::llm::models::provider_base::{
    build_http_client, classify_status, GenerationOptions, Message, ProviderClient,
};

const BRAND: &str = "Anthropic";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct ClaudeClient {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
    http_client: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(base_url: String, api_key: String, model_name: String, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            base_url,
            api_key,
            model_name,
            http_client: build_http_client(timeout_secs)?,
        })
    }
}

impl ProviderClient for ClaudeClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        let url = messages_url(&self.base_url);
        let request_body = build_messages_request_body(
            &self.model_name,
            system_prompt,
            vec![Message::user(user_prompt)],
            options,
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::Transport(format!(
                    "Failed to send request to {} API (possible timeout or network error): {}",
                    BRAND, e
                ))
            })?;

        log::debug!("Claude response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Claude API error ({}): {}", status, error_text);
            return Err(classify_status(BRAND, status, &error_text));
        }

        let json: Value = response.json().await.map_err(|e| {
            ProviderError::Transport(format!("Failed to parse {} response JSON: {}", BRAND, e))
        })?;

        extract_text_blocks(&json).ok_or_else(|| ProviderError::EmptyResponse(BRAND.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

pub(crate) fn messages_url(base_url: &str) -> String {
    format!("{}/v1/messages", base_url.trim_end_matches('/'))
}

pub(crate) fn build_messages_request_body(
    model: &str,
    system_prompt: &str,
    messages: Vec<Message>,
    options: &GenerationOptions,
) -> Value {
    let anthropic_messages: Vec<Value> = messages
        .into_iter()
        .filter(|m| m.role != "system")
        .map(|m| {
            json!({
                "role": m.role,
                "content": m.content
            })
        })
        .collect();

    let mut request_body = json!({
        "model": model,
        "messages": anthropic_messages,
        "max_tokens": options.max_tokens,
        "temperature": options.temperature,
    });
    if !system_prompt.is_empty() {
        request_body["system"] = json!(system_prompt);
    }
    request_body
}

/// Concatenates every text block of a messages response; `None` when the
/// result is blank.
pub(crate) fn extract_text_blocks(response: &Value) -> Option<String> {
    let blocks = response.get("content").and_then(|c| c.as_array())?;
    let text: String = blocks
        .iter()
        .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

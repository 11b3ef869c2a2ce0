use anyhow::Result;
use serde_json::{json, Value};

use crate::error::ProviderError;
use crate::llm::utils::string_util::truncate_utf8_with_ellipsis;
use crate::llm::models::provider_base::{
    build_http_client, classify_status, GenerationOptions, Message, ProviderClient,
};

const BRAND: &str = "OpenAI";

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_base: String, api_key: String, model: String, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            api_base,
            api_key,
            model,
            http_client: build_http_client(timeout_secs)?,
        })
    }
}

impl ProviderClient for OpenAiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        let messages = vec![Message::system(system_prompt), Message::user(user_prompt)];
        let request_body = build_chat_completions_request_body(&self.model, messages, options);
        let url_candidates = chat_completions_url_candidates(&self.api_base);

        let response = send_first_successful_chat_completions_request(
            &self.http_client,
            &url_candidates,
            &self.api_key,
            &request_body,
        )
        .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("OpenAI API error ({}): {}", status, error_text);
            return Err(classify_status(BRAND, status, &error_text));
        }

        let json: Value = response.json().await.map_err(|e| {
            ProviderError::Transport(format!("Failed to parse {} response JSON: {}", BRAND, e))
        })?;

        extract_completion_text(&json).ok_or_else(|| ProviderError::EmptyResponse(BRAND.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

pub(crate) fn build_chat_completions_request_body(
    model: &str,
    messages: Vec<Message>,
    options: &GenerationOptions,
) -> Value {
    let converted_messages: Vec<Value> = messages
        .into_iter()
        .map(|msg| {
            json!({
                "role": msg.role,
                "content": msg.content,
            })
        })
        .collect();

    json!({
        "model": model,
        "messages": converted_messages,
        "temperature": options.temperature,
        "max_tokens": options.max_tokens,
        "stream": false,
    })
}

/// Text of the first choice; `None` when it is missing or blank.
pub(crate) fn extract_completion_text(response: &Value) -> Option<String> {
    let content = response
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())?;
    if content.trim().is_empty() {
        return None;
    }
    Some(content.to_string())
}

pub(crate) fn chat_completions_url_candidates(api_base: &str) -> Vec<String> {
    let base = api_base.trim_end_matches('/');
    let mut out = Vec::new();
    out.push(format!("{}/chat/completions", base));
    out.push(format!("{}/v1/chat/completions", base));
    out
}

async fn send_first_successful_chat_completions_request(
    http_client: &reqwest::Client,
    url_candidates: &[String],
    api_key: &str,
    request_body: &Value,
) -> Result<reqwest::Response, ProviderError> {
    let mut first_not_found: Option<ProviderError> = None;
    let mut last_err: Option<ProviderError> = None;

    for url in url_candidates {
        let response = http_client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await;

        match response {
            Ok(resp) => {
                if resp.status() == reqwest::StatusCode::NOT_FOUND {
                    let body = resp.text().await.unwrap_or_default();
                    log::warn!("{} API returned 404 at {}: {}", BRAND, url, body);
                    // The first 404 usually carries the real reason (e.g. unknown model)
                    if first_not_found.is_none() {
                        first_not_found = Some(not_found_error(url, &body));
                    }
                    continue;
                }
                return Ok(resp);
            }
            Err(e) => {
                log::warn!("Failed to send request to {} API ({}): {}", BRAND, url, e);
                last_err = Some(ProviderError::Transport(format!(
                    "Failed to send request to {} API ({}): {}",
                    BRAND, url, e
                )));
            }
        }
    }

    Err(first_not_found.or(last_err).unwrap_or_else(|| {
        ProviderError::Transport(format!("Failed to send request to {} API", BRAND))
    }))
}

pub(crate) fn not_found_error(url: &str, body: &str) -> ProviderError {
    let body = truncate_utf8_with_ellipsis(body.trim(), 500);
    if body.is_empty() {
        ProviderError::Transport(format!("{} API endpoint not found: {}", BRAND, url))
    } else {
        ProviderError::Transport(format!("{} API error (404) at {}: {}", BRAND, url, body))
    }
}

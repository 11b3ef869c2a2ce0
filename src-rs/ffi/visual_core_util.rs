use napi::bindgen_prelude::*;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::VisualizationResult;
use crate::llm::models::provider_handle::{create_client_from_config, AnyProviderClient};
use crate::service::VisualizationService;
use crate::visualization::catalog::EXAMPLE_TOPICS;
use crate::visualization::{ErrorRecord, VisualizationRecord};

/// Result of `generateVisualization` as seen from JavaScript. `payload` holds
/// either a visualization record or an error record, both as JSON.
#[napi_derive::napi(object)]
pub struct CoreVisualizationOutcome {
    pub success: bool,
    pub payload: String,
    pub error_kind: Option<String>,
}

#[napi_derive::napi(object)]
pub struct CoreExampleCategory {
    pub category: String,
    pub topics: Vec<String>,
}

pub(crate) struct ServiceParts {
    pub service: Arc<VisualizationService<AnyProviderClient>>,
    pub debug: bool,
}

pub(crate) fn build_service(config: &AppConfig) -> Result<ServiceParts> {
    let client = create_client_from_config(config)
        .map_err(|e| Error::from_reason(format!("Failed to initialize AI service: {}", e)))?;
    log::info!("AI Provider: {}", client.provider_kind());
    Ok(ServiceParts {
        service: Arc::new(VisualizationService::new(client, config.generation.clone())),
        debug: config.debug,
    })
}

pub(crate) fn outcome_from_result(
    result: VisualizationResult<VisualizationRecord>,
    debug: bool,
) -> CoreVisualizationOutcome {
    match result {
        Ok(record) => CoreVisualizationOutcome {
            success: true,
            payload: serde_json::to_string(&record).unwrap_or_else(|_| "{}".to_string()),
            error_kind: None,
        },
        Err(e) => {
            let record = ErrorRecord::from_error(&e, debug);
            CoreVisualizationOutcome {
                success: false,
                payload: serde_json::to_string(&record).unwrap_or_else(|_| "{}".to_string()),
                error_kind: Some(e.kind().to_string()),
            }
        }
    }
}

/// Parses the optional chatbot context. Blank input means no context.
pub(crate) fn parse_chat_context(context_json: Option<&str>) -> anyhow::Result<Map<String, Value>> {
    let Some(raw) = context_json.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => anyhow::bail!("chat context must be a JSON object, got {}", other),
    }
}

pub(crate) fn example_categories() -> Vec<CoreExampleCategory> {
    EXAMPLE_TOPICS
        .iter()
        .map(|c| CoreExampleCategory {
            category: c.category.to_string(),
            topics: c.topics.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

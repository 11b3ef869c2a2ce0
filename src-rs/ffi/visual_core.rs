use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::init_logger;
use crate::llm::models::provider_handle::AnyProviderClient;
use crate::llm::prompts::chatbot::CHATBOT_FALLBACK;
use crate::service::VisualizationService;

use super::visual_core_util::{self, CoreVisualizationOutcome};

/// Entry point held by the host process. Constructed once and reused for
/// every request.
#[napi]
pub struct VisualLearningCore {
    inner: Arc<VisualizationService<AnyProviderClient>>,
    debug: bool,
}

#[napi]
impl VisualLearningCore {
    #[napi(factory)]
    pub fn from_config() -> Result<Self> {
        let config =
            AppConfig::load().map_err(|e| Error::from_reason(format!("Failed to load config: {}", e)))?;
        init_logger(config.debug);
        let parts = visual_core_util::build_service(&config)?;
        log::info!("AI Service initialized successfully");
        Ok(Self {
            inner: parts.service,
            debug: parts.debug,
        })
    }

    #[napi]
    pub fn provider_name(&self) -> String {
        self.inner.provider().provider_kind().provider_name().to_string()
    }

    #[napi]
    pub async fn generate_visualization(&self, topic: String) -> Result<CoreVisualizationOutcome> {
        let service = Arc::clone(&self.inner);
        let result = service.generate_visualization(&topic).await;
        if let Err(e) = &result {
            log::error!("Error generating visualization: {}", e);
        }
        Ok(visual_core_util::outcome_from_result(result, self.debug))
    }

    #[napi]
    pub async fn answer_question(&self, message: String, context_json: Option<String>) -> Result<String> {
        let context = match visual_core_util::parse_chat_context(context_json.as_deref()) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Chatbot error: invalid context: {}", e);
                return Ok(CHATBOT_FALLBACK.to_string());
            }
        };
        let service = Arc::clone(&self.inner);
        Ok(service.answer_question(&message, &context).await)
    }
}

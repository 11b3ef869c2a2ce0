//! The two operations the host calls: topic → visualization, and
//! question → answer.

use serde_json::{Map, Value};

use crate::config::GenerationConfig;
use crate::error::VisualizationResult;
use crate::llm::models::provider_base::ProviderClient;
use crate::llm::prompts::{chatbot, visualization};
use crate::visualization::{normalize, VisualizationRecord, VisualizationRequest};

pub struct VisualizationService<P: ProviderClient> {
    provider: P,
    generation: GenerationConfig,
}

impl<P: ProviderClient> VisualizationService<P> {
    pub fn new(provider: P, generation: GenerationConfig) -> Self {
        Self {
            provider,
            generation,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generates and validates a visualization. Every failure is returned to
    /// the caller unchanged; nothing is retried.
    pub async fn generate_visualization(&self, topic: &str) -> VisualizationResult<VisualizationRecord> {
        let request = VisualizationRequest::new(topic).map_err(|e| {
            log::warn!("Rejected visualization request: {}", e);
            e
        })?;
        log::info!("Generating visualization for topic: {}", request.topic());

        let (system_prompt, user_prompt) = visualization::build(request.topic());
        let raw = self
            .provider
            .generate(&system_prompt, &user_prompt, &self.generation.visualization)
            .await
            .map_err(|e| {
                log::error!("Provider call failed for '{}': {}", request.topic(), e);
                e
            })?;

        let record = normalize(&raw, request.topic())?;
        log::info!(
            "Successfully generated {} visualization with {} components for: {}",
            record.visualization_type,
            record.components.len(),
            request.topic()
        );
        Ok(record)
    }

    /// Answers a learner question. Never fails: any error is logged and the
    /// fixed fallback text is returned instead.
    pub async fn answer_question(&self, message: &str, context: &Map<String, Value>) -> String {
        log::info!("Chatbot question: {} | Context: {:?}", message, context);

        let (system_prompt, user_prompt) = chatbot::build(message, context);
        match self
            .provider
            .generate(&system_prompt, &user_prompt, &self.generation.chatbot)
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("Chatbot error: {}", e);
                chatbot::CHATBOT_FALLBACK.to_string()
            }
        }
    }
}

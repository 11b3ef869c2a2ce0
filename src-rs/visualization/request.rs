use crate::error::{VisualizationError, VisualizationResult};

pub const MIN_TOPIC_CHARS: usize = 3;
pub const MAX_TOPIC_CHARS: usize = 200;

/// A caller-supplied topic that passed the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationRequest {
    topic: String,
}

impl VisualizationRequest {
    pub fn new(topic: impl Into<String>) -> VisualizationResult<Self> {
        let topic = topic.into();
        let len = topic.chars().count();
        if len < MIN_TOPIC_CHARS {
            return Err(VisualizationError::InvalidTopic(format!(
                "topic must be at least {} characters, got {}",
                MIN_TOPIC_CHARS, len
            )));
        }
        if len > MAX_TOPIC_CHARS {
            return Err(VisualizationError::InvalidTopic(format!(
                "topic must be at most {} characters, got {}",
                MAX_TOPIC_CHARS, len
            )));
        }
        Ok(Self { topic })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

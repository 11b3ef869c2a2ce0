use thiserror::Error;

/// Failures reported by a provider adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider transport failure: {0}")]
    Transport(String),

    #[error("Provider rejected credentials: {0}")]
    Auth(String),

    #[error("Empty response from {0}")]
    EmptyResponse(String),
}

/// Classified failures of `generate_visualization`. All of them are terminal
/// for the current call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisualizationError {
    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("AI returned an unparseable response: {diagnostic}")]
    MalformedResponse { diagnostic: String, snippet: String },

    #[error("AI response violates the visualization schema at '{field}': {reason}")]
    SchemaViolation { field: String, reason: String },
}

impl VisualizationError {
    /// Stable name of the error class, exposed to the host for programmatic handling.
    pub fn kind(&self) -> &'static str {
        match self {
            VisualizationError::InvalidTopic(_) => "InvalidTopic",
            VisualizationError::Provider(_) => "ProviderError",
            VisualizationError::MalformedResponse { .. } => "MalformedResponse",
            VisualizationError::SchemaViolation { .. } => "SchemaViolation",
        }
    }

    pub(crate) fn malformed(diagnostic: impl Into<String>, snippet: impl Into<String>) -> Self {
        VisualizationError::MalformedResponse {
            diagnostic: diagnostic.into(),
            snippet: snippet.into(),
        }
    }

    pub(crate) fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        VisualizationError::SchemaViolation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type VisualizationResult<T> = std::result::Result<T, VisualizationError>;

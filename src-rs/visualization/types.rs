use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::VisualizationError;

/// Shape of the visualization as a whole. Closed set: anything else the
/// provider returns is a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    Tree,
    Graph,
    Flowchart,
    Animation,
    Comparison,
    Timeline,
    Process,
}

impl VisualizationType {
    pub const ALL: [VisualizationType; 7] = [
        VisualizationType::Tree,
        VisualizationType::Graph,
        VisualizationType::Flowchart,
        VisualizationType::Animation,
        VisualizationType::Comparison,
        VisualizationType::Timeline,
        VisualizationType::Process,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationType::Tree => "tree",
            VisualizationType::Graph => "graph",
            VisualizationType::Flowchart => "flowchart",
            VisualizationType::Animation => "animation",
            VisualizationType::Comparison => "comparison",
            VisualizationType::Timeline => "timeline",
            VisualizationType::Process => "process",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of renderable element. Unknown kinds are carried through unchanged so
/// that newer front-ends can render them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    Node,
    Edge,
    Shape,
    Text,
    Arrow,
    Other(String),
}

impl From<String> for ComponentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "node" => ComponentType::Node,
            "edge" => ComponentType::Edge,
            "shape" => ComponentType::Shape,
            "text" => ComponentType::Text,
            "arrow" => ComponentType::Arrow,
            _ => ComponentType::Other(s),
        }
    }
}

impl From<ComponentType> for String {
    fn from(t: ComponentType) -> Self {
        match t {
            ComponentType::Node => "node".to_string(),
            ComponentType::Edge => "edge".to_string(),
            ComponentType::Shape => "shape".to_string(),
            ComponentType::Text => "text".to_string(),
            ComponentType::Arrow => "arrow".to_string(),
            ComponentType::Other(s) => s,
        }
    }
}

/// Interactive control kind. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractiveElementType {
    Button,
    Slider,
    Toggle,
    Input,
}

impl InteractiveElementType {
    pub const ALL: [InteractiveElementType; 4] = [
        InteractiveElementType::Button,
        InteractiveElementType::Slider,
        InteractiveElementType::Toggle,
        InteractiveElementType::Input,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractiveElementType::Button => "button",
            InteractiveElementType::Slider => "slider",
            InteractiveElementType::Toggle => "toggle",
            InteractiveElementType::Input => "input",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Visual properties (x, y, width, height, color, label, ...)
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub connections: Vec<String>,
}

/// One property transition applied during an animation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Usually a component id string, but any JSON value is carried through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Value>,
    #[serde(default)]
    pub from: Value,
    #[serde(default)]
    pub to: Value,
    /// Keys the provider added beyond the four above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub step_number: u64,
    pub description: String,
    /// Seconds, within [`MIN_STEP_DURATION`, `MAX_STEP_DURATION`]
    pub duration: f64,
    #[serde(default)]
    pub changes: Vec<ChangeRecord>,
    #[serde(default)]
    pub highlight: Vec<String>,
}

pub const MIN_STEP_DURATION: f64 = 0.1;
pub const MAX_STEP_DURATION: f64 = 10.0;
pub const DEFAULT_STEP_DURATION: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: InteractiveElementType,
    pub label: String,
    /// Client-side action name (play, pause, reset, step_forward, ...)
    pub action: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Validated visualization returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationRecord {
    pub success: bool,
    pub topic: String,
    pub title: String,
    pub description: String,
    pub visualization_type: VisualizationType,
    #[serde(default)]
    pub components: Vec<VisualComponent>,
    #[serde(default)]
    pub steps: Vec<AnimationStep>,
    #[serde(default)]
    pub interactive_elements: Vec<InteractiveElement>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Failure payload handed to the host in place of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub success: bool,
    pub error: String,
    pub details: Option<String>,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }

    /// Builds the host-facing record for a failed generation. Details are only
    /// exposed when `debug` is set.
    pub fn from_error(err: &VisualizationError, debug: bool) -> Self {
        let error = match err {
            VisualizationError::InvalidTopic(_) => "Invalid request",
            _ => "Failed to generate visualization",
        };
        let details = if debug || matches!(err, VisualizationError::InvalidTopic(_)) {
            Some(err.to_string())
        } else {
            None
        };
        Self::new(error, details)
    }
}

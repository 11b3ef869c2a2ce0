// Visualization records, request validation and response normalization

pub mod catalog;
pub mod normalizer;
pub mod request;
pub mod schema;
pub mod types;

pub use normalizer::normalize;
pub use request::VisualizationRequest;
pub use types::{ErrorRecord, VisualizationRecord};

pub mod visual_core;
pub mod visual_core_util;

pub use visual_core::*;
pub use visual_core_util::{CoreExampleCategory, CoreVisualizationOutcome};

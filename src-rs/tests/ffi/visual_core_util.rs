use crate::error::{ProviderError, VisualizationError};
use crate::ffi::visual_core_util::{example_categories, outcome_from_result, parse_chat_context};
use crate::visualization::normalize;
use serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str =
        r#"{"topic":"Stack","title":"Stack","description":"LIFO","visualization_type":"process"}"#;

    fn payload(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_outcome_carries_record() {
        let outcome = outcome_from_result(normalize(MINIMAL, "Stack"), false);
        assert!(outcome.success);
        assert!(outcome.error_kind.is_none());
        let value = payload(&outcome.payload);
        assert_eq!(value["success"], true);
        assert_eq!(value["visualization_type"], "process");
    }

    #[test]
    fn error_outcome_hides_details_without_debug() {
        let err = VisualizationError::Provider(ProviderError::Auth("invalid x-api-key".to_string()));
        let outcome = outcome_from_result(Err(err), false);
        assert!(!outcome.success);
        assert_eq!(outcome.error_kind.as_deref(), Some("ProviderError"));
        let value = payload(&outcome.payload);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Failed to generate visualization");
        assert!(value["details"].is_null());
        assert!(!outcome.payload.contains("x-api-key"));
    }

    #[test]
    fn error_outcome_shows_details_in_debug() {
        let err = VisualizationError::SchemaViolation {
            field: "steps[0].duration".to_string(),
            reason: "out of range".to_string(),
        };
        let outcome = outcome_from_result(Err(err), true);
        assert_eq!(outcome.error_kind.as_deref(), Some("SchemaViolation"));
        let value = payload(&outcome.payload);
        assert!(value["details"].as_str().unwrap().contains("steps[0].duration"));
    }

    #[test]
    fn invalid_topic_always_explains() {
        let err = VisualizationError::InvalidTopic("topic must be at least 3 characters, got 1".to_string());
        let outcome = outcome_from_result(Err(err), false);
        let value = payload(&outcome.payload);
        assert_eq!(value["error"], "Invalid request");
        assert!(value["details"].as_str().unwrap().contains("at least 3"));
    }

    #[test]
    fn chat_context_parsing() {
        assert!(parse_chat_context(None).unwrap().is_empty());
        assert!(parse_chat_context(Some("  ")).unwrap().is_empty());
        assert!(parse_chat_context(Some("null")).unwrap().is_empty());

        let ctx = parse_chat_context(Some(r#"{"tree_type":"BST"}"#)).unwrap();
        assert_eq!(ctx["tree_type"], "BST");

        assert!(parse_chat_context(Some("[1,2]")).is_err());
        assert!(parse_chat_context(Some("{oops")).is_err());
    }

    #[test]
    fn example_catalog_has_six_categories_of_five() {
        let categories = example_categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| c.topics.len() == 5));
        assert!(categories
            .iter()
            .any(|c| c.topics.iter().any(|t| t == "Binary Search Tree")));
    }
}

use crate::llm::prompts::{chatbot, visualization};
use crate::visualization::types::VisualizationType;
use serde_json::{json, Map, Value};

#[cfg(test)]
mod tests {
    use super::*;

    fn context(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn visualization_prompt_embeds_topic_verbatim() {
        let topic = "Dijkstra's \"shortest\" path {weighted}";
        let (system, user) = visualization::build(topic);
        assert_eq!(user, format!("Create a visualization for: {}", topic));
        assert_eq!(system, visualization::VISUALIZATION_SYSTEM_PROMPT);
    }

    #[test]
    fn visualization_prompt_names_every_type() {
        for t in VisualizationType::ALL {
            assert!(
                visualization::VISUALIZATION_SYSTEM_PROMPT.contains(t.as_str()),
                "missing {}",
                t
            );
        }
        assert!(visualization::VISUALIZATION_SYSTEM_PROMPT.contains("1000x800"));
        assert!(visualization::VISUALIZATION_SYSTEM_PROMPT.contains("in-order"));
    }

    #[test]
    fn chatbot_without_context_has_bare_question() {
        let (system, user) = chatbot::build("What is a heap?", &Map::new());
        assert!(system.contains("under 200 words"));
        assert_eq!(user, "\n\nQuestion: What is a heap?");
    }

    #[test]
    fn chatbot_context_describes_view() {
        let ctx = context(json!({"tree_type": "AVL tree", "traversal": "pre-order"}));
        let (_, user) = chatbot::build("Why rotate?", &ctx);
        assert_eq!(
            user,
            "The user is currently viewing a AVL tree with pre-order traversal.\n\nQuestion: Why rotate?"
        );
    }

    #[test]
    fn chatbot_context_falls_back_per_key() {
        let ctx = context(json!({"selected_node": 42}));
        let (_, user) = chatbot::build("q", &ctx);
        assert!(user.starts_with("The user is currently viewing a tree with standard traversal."));

        let ctx = context(json!({"tree_type": null, "traversal": "in-order"}));
        let (_, user) = chatbot::build("q", &ctx);
        assert!(user.starts_with("The user is currently viewing a tree with in-order traversal."));
    }

    #[test]
    fn chatbot_context_renders_non_string_values() {
        let ctx = context(json!({"tree_type": 7, "traversal": true}));
        let (_, user) = chatbot::build("q", &ctx);
        assert!(user.starts_with("The user is currently viewing a 7 with true traversal."));
    }

    #[test]
    fn fallback_lists_suggestions() {
        assert!(chatbot::CHATBOT_FALLBACK.starts_with("I'm having trouble processing that question."));
        assert_eq!(chatbot::CHATBOT_FALLBACK.matches('•').count(), 4);
    }
}

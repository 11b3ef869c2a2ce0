use crate::llm::models::claude::{build_messages_request_body, extract_text_blocks, messages_url};
use crate::llm::models::provider_base::{GenerationOptions, Message};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_url_appends_versioned_path() {
        assert_eq!(messages_url("https://api.anthropic.com"), "https://api.anthropic.com/v1/messages");
        assert_eq!(messages_url("https://proxy.local/"), "https://proxy.local/v1/messages");
    }

    #[test]
    fn system_prompt_is_top_level() {
        let body = build_messages_request_body(
            "claude-3-5-sonnet-20241022",
            "be brief",
            vec![Message::system("dropped"), Message::user("What is a heap?")],
            &GenerationOptions::default(),
        );
        assert_eq!(body["system"], "be brief");
        assert_eq!(body["max_tokens"], 4000);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], json!({"role": "user", "content": "What is a heap?"}));
    }

    #[test]
    fn empty_system_prompt_is_omitted() {
        let body = build_messages_request_body("m", "", vec![Message::user("q")], &GenerationOptions::default());
        assert!(body.get("system").is_none());
    }

    #[test]
    fn temperature_is_sent_exactly() {
        let body = build_messages_request_body("m", "", vec![Message::user("q")], &GenerationOptions::default());
        assert_eq!(body["temperature"], json!(0.7));
        assert_eq!(body["temperature"].to_string(), "0.7");
    }

    #[test]
    fn text_blocks_are_concatenated() {
        let response = json!({
            "content": [
                {"type": "text", "text": "{\"a\":"},
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "1}"}
            ]
        });
        assert_eq!(extract_text_blocks(&response).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn no_text_is_none() {
        assert!(extract_text_blocks(&json!({"content": []})).is_none());
        assert!(extract_text_blocks(&json!({"content": [{"type": "text", "text": " "}]})).is_none());
        assert!(extract_text_blocks(&json!({"type": "error"})).is_none());
    }
}

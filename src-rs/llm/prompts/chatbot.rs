use serde_json::{Map, Value};

pub const CHATBOT_SYSTEM_PROMPT: &str = "You are a helpful teaching assistant for software engineering, \
computer science, data structures, algorithms, system design and programming concepts. \
Give clear, concise, educational answers, using bullet points and examples when they help. \
Keep responses under 200 words.";

/// Returned by the chatbot whenever an answer cannot be produced.
pub const CHATBOT_FALLBACK: &str = "I'm having trouble processing that question. Try asking about:\n\
• Time/space complexity\n\
• Tree operations\n\
• Use cases\n\
• Comparison with other structures";

/// Returns `(system_prompt, user_prompt)` for a learner question.
///
/// A non-empty `context` describes what the learner is looking at; only
/// `tree_type` and `traversal` are read from it.
pub fn build(message: &str, context: &Map<String, Value>) -> (String, String) {
    let context_info = describe_context(context);
    (
        CHATBOT_SYSTEM_PROMPT.to_string(),
        format!("{}\n\nQuestion: {}", context_info, message),
    )
}

fn describe_context(context: &Map<String, Value>) -> String {
    if context.is_empty() {
        return String::new();
    }
    let tree_type = context_text(context, "tree_type").unwrap_or_else(|| "tree".to_string());
    let traversal = context_text(context, "traversal").unwrap_or_else(|| "standard".to_string());
    format!(
        "The user is currently viewing a {} with {} traversal.",
        tree_type, traversal
    )
}

/// Strings are used as-is, other values in their JSON form. Null counts as absent.
fn context_text(context: &Map<String, Value>, key: &str) -> Option<String> {
    match context.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

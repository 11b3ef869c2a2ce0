// Prompt templates. Each feature owns its template; nothing is shared between them.

pub mod chatbot;
pub mod visualization;

//! Turns raw provider text into a validated [`VisualizationRecord`].
//!
//! Providers wrap their JSON in markdown fences or surround it with prose
//! often enough that the text is cleaned up before parsing. Parsing happens
//! into a dynamic `serde_json::Value` first; [`schema::validate_record`]
//! then maps it onto the strict record type.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::schema;
use super::types::VisualizationRecord;
use crate::error::{VisualizationError, VisualizationResult};
use crate::llm::utils::string_util::truncate_utf8_with_ellipsis;

const SNIPPET_MAX_BYTES: usize = 200;

lazy_static! {
    // ``` or ```json / ```JSON / ``` javascript, up to the end of that line
    static ref OPENING_FENCE: Regex =
        Regex::new(r"^```[ \t]*[A-Za-z0-9_+.\-]*[ \t]*(?:\r?\n|$)").unwrap();
}

pub fn normalize(raw: &str, topic: &str) -> VisualizationResult<VisualizationRecord> {
    let stripped = strip_code_fences(raw);
    let candidate = extract_json_candidate(stripped)?;

    let value: Value = serde_json::from_str(candidate).map_err(|e| {
        log::warn!("Failed to parse AI response for '{}' as JSON: {}", topic, e);
        VisualizationError::malformed(
            e.to_string(),
            truncate_utf8_with_ellipsis(candidate, SNIPPET_MAX_BYTES),
        )
    })?;

    let record = schema::validate_record(&value).map_err(|e| {
        log::warn!("AI response for '{}' failed validation: {}", topic, e);
        e
    })?;

    log::debug!(
        "Normalized {} visualization for '{}': {} components, {} steps, {} controls",
        record.visualization_type,
        topic,
        record.components.len(),
        record.steps.len(),
        record.interactive_elements.len()
    );
    Ok(record)
}

/// Removes a leading ```` ``` ```` / ```` ```json ```` fence line and a
/// trailing ```` ``` ````, then trims.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(fence) = OPENING_FENCE.find(trimmed) else {
        return trimmed;
    };
    let body = trimmed[fence.end()..].trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// Returns the text itself when it already starts with `{`, otherwise the
/// span from the first `{` to the last `}`.
pub fn extract_json_candidate(text: &str) -> VisualizationResult<&str> {
    if text.starts_with('{') {
        return Ok(text);
    }
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(&text[start..=end]),
        _ => Err(VisualizationError::malformed(
            "no JSON object found in response",
            truncate_utf8_with_ellipsis(text, SNIPPET_MAX_BYTES),
        )),
    }
}

/// Truncates a string to at most `max_bytes` while ensuring it's a valid UTF-8 sequence.
/// Adds an ellipsis if truncated.
pub fn truncate_utf8_with_ellipsis(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }

    let mut end = 0usize;
    for (i, ch) in s.char_indices() {
        let next = i + ch.len_utf8();
        if next <= max_bytes {
            end = next;
        } else {
            break;
        }
    }

    if end == 0 && !s.is_empty() {
        let first_end = s.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
        end = std::cmp::min(first_end, s.len());
    }

    format!("{}...", &s[..end])
}

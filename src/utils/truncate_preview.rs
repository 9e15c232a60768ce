use crate::constants::PREVIEW_ELLIPSIS;

/// Shortens `text` to at most `max_chars` characters for display, appending
/// an ellipsis marker when anything was cut.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], PREVIEW_ELLIPSIS),
        None => text.to_string(),
    }
}

//! Human-readable fallbacks derived from URIs and free text.

/// Derive a label from the tail segment of a URI.
///
/// A non-empty `base_uri` prefix is stripped first. The tail is whatever
/// follows the last `#`, or failing that the last `/`. If nothing usable
/// remains, the URI is returned unchanged.
#[must_use]
pub fn uri_label(uri: &str, base_uri: &str) -> String {
    let relative = if base_uri.is_empty() {
        uri
    } else {
        uri.strip_prefix(base_uri).unwrap_or(uri)
    };

    let tail = relative
        .rsplit_once('#')
        .or_else(|| relative.rsplit_once('/'))
        .map_or(relative, |(_, tail)| tail);

    if tail.is_empty() {
        uri.to_string()
    } else {
        tail.to_string()
    }
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

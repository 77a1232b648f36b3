//! HTML escaping for code content.

/// Escape HTML-significant characters so text renders verbatim.
///
/// Used for fenced code block interiors; the rest of the dialect is assumed
/// to be safe plain text and is emitted as-is.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

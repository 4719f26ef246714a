//! Escaping for hand-assembled HTML and XML fragments.

/// Escapes the five markup-significant characters for use in text or
/// double/single-quoted attribute values. Valid for both HTML and XML.
pub fn escape_markup(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

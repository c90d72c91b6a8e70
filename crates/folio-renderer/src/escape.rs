//! HTML escaping for text and attribute values.

/// Escape the four HTML-significant characters `&`, `<`, `>` and `"`.
///
/// Ampersands are handled first, so text that already contains an entity is
/// escaped again (`&lt;` becomes `&amp;lt;`) rather than surviving as live
/// markup. Every other character, Unicode included, passes through
/// untouched. Single quotes are not escaped; attribute values are always
/// emitted with double quotes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//! Minimal HTML escaping for interpolated text.

/// Escapes the five characters with meaning in HTML text and attribute
/// positions. Everything user-entered (names, SKUs, composition) goes
/// through here before interpolation.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! HTML anchor snippet for embedding a built link in a page.

/// Escapes the four markup-significant characters so the value is safe in
/// both attribute values and element text.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders `<a href="URL" target="_blank" rel="noopener">LABEL</a>`.
///
/// Both pieces are escaped; the query joiner `&` becomes `&amp;` so the
/// snippet can be pasted into markup unchanged.
pub fn anchor_snippet(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        escape_html(url),
        escape_html(label)
    )
}

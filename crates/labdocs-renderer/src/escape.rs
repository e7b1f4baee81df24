/// Escape the characters that would otherwise open markup.
///
/// Only `&`, `<` and `>` are replaced. Quotes are left alone so that link
/// targets written in Markdown still land intact inside `href="…"`.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

//! Minimal static HTML wrapper around the text report.

/// Wrap a text report in a standalone HTML document.
///
/// HTML-special characters are escaped, `£` becomes `&pound;` and every
/// newline becomes a `<br>`.
pub fn render_html(text: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        escape(text).replace('\n', "<br>\n")
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '£' => out.push_str("&pound;"),
            other => out.push(other),
        }
    }
    out
}

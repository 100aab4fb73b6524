const MAX_LOG_LENGTH: usize = 2_000;

/// Shorten text for log output, cutting on a char boundary.
pub fn truncate_for_log(text: &str) -> String {
    if text.len() <= MAX_LOG_LENGTH {
        return text.to_string();
    }
    let mut end = MAX_LOG_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated {} bytes]", &text[..end], text.len() - end)
}

/// Escape HTML special characters for safe interpolation into markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

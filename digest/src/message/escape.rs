//! MarkdownV2 escaping
//!
//! Applied to human-readable text only. Link targets are embedded as-is.

/// Characters with markup meaning in MarkdownV2
pub const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '=', '|', '{', '}', '.', '!', '-',
];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Backslash-escape every reserved character in `text`
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_reserved(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

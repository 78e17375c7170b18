//! Pure escaping utilities for the MarkdownV2 dialect.
//!
//! Two independent tables are used. Plain text (and therefore the body of
//! every styled fragment, since bodies bottom out in plain text leaves) is
//! escaped against [`MARKDOWN_RESERVED`]. Link targets only escape
//! [`URL_RESERVED`]. Every matched character is prefixed with a backslash in
//! a single left-to-right pass; nothing else is touched.

/// Characters that must be escaped anywhere in message text.
pub const MARKDOWN_RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Characters that must be escaped inside the `(...)` part of a link.
pub const URL_RESERVED: &[char] = &['\\', ')'];

const ESCAPE: char = '\\';

/// Escape text for use in a MarkdownV2 message body.
///
/// # Examples
///
/// ```
/// use telegram_markdown_text::escape_markdown;
///
/// assert_eq!(escape_markdown("a*b_c"), "a\\*b\\_c");
/// assert_eq!(escape_markdown("v1.0!"), "v1\\.0\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    escape_with(text, MARKDOWN_RESERVED)
}

/// Escape a link target.
///
/// Only `\` and `)` are significant inside a link target, so `(` is left
/// alone.
///
/// # Examples
///
/// ```
/// use telegram_markdown_text::escape_url;
///
/// assert_eq!(escape_url("http://a.com/(b)"), "http://a.com/(b\\)");
/// ```
pub fn escape_url(url: &str) -> String {
    escape_with(url, URL_RESERVED)
}

fn escape_with(text: &str, reserved: &[char]) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        if reserved.contains(&c) {
            result.push(ESCAPE);
        }
        result.push(c);
    }

    result
}

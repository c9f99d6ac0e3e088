//! Markdown metacharacter escaping.

/// Characters the chat transport's markdown renderer interprets, in the
/// order they are escaped.
pub const MARKDOWN_METACHARACTERS: [char; 5] = ['_', '*', '[', ']', '`'];

/// Prefix every markdown metacharacter with a backslash.
///
/// This is a single blind pass: an already escaped `\_` becomes `\\_`, so
/// running it twice double-escapes. Callers must escape each message once.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        if MARKDOWN_METACHARACTERS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }

    out
}

//! Backslash escape handling.
//!
//! Upstream systems sometimes render escape syntax as visible text, so a
//! message may arrive containing a literal backslash followed by `n` instead
//! of a newline, or a broken sequence like `\q`. Two passes deal with this:
//! [`normalize_escapes`] keeps well-formed escape tokens and drops stray
//! backslashes, then [`convert_literal_escapes`] turns the line-structure
//! tokens into real control characters. Markdown escaping runs after both
//! and relies on the control characters already being real ones.

/// Single-character escape letters kept verbatim after a backslash.
const ESCAPE_LETTERS: &[char] = &['n', 't', 'r', '\\', 'a', 'b', 'f', 'v', '0'];

/// Literal token to control character, applied in this order so `\r\n` is
/// consumed before its halves.
const LITERAL_CONTROLS: &[(&str, &str)] = &[
    ("\\r\\n", "\r\n"),
    ("\\n", "\n"),
    ("\\r", "\r"),
    ("\\t", "\t"),
];

/// Keep well-formed escape tokens verbatim and drop garbage backslashes.
///
/// For a backslash with at least one following character:
/// - `\xHH` with two hex digits is copied as four characters;
/// - `\x` without two hex digits loses the backslash only, and the `x` is
///   re-read as ordinary text;
/// - `\` followed by one of `n t r \ a b f v 0` or an ASCII digit is copied
///   as two characters;
/// - any other follower loses the backslash.
///
/// A backslash at the very end of the text has no follower and is copied.
pub fn normalize_escapes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c != '\\' || i + 1 >= chars.len() {
            out.push(c);
            i += 1;
            continue;
        }

        let next = chars[i + 1];
        if next == 'x' {
            let is_hex_escape = i + 3 < chars.len()
                && chars[i + 2].is_ascii_hexdigit()
                && chars[i + 3].is_ascii_hexdigit();
            if is_hex_escape {
                out.extend(&chars[i..i + 4]);
                i += 4;
            } else {
                i += 1;
            }
        } else if ESCAPE_LETTERS.contains(&next) || next.is_ascii_digit() {
            out.push(c);
            out.push(next);
            i += 2;
        } else {
            i += 1;
        }
    }

    out
}

/// Replace the literal tokens `\r\n`, `\n`, `\r` and `\t` with the control
/// characters they spell.
pub fn convert_literal_escapes(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    LITERAL_CONTROLS
        .iter()
        .fold(text.to_string(), |acc, (literal, control)| {
            acc.replace(literal, control)
        })
}

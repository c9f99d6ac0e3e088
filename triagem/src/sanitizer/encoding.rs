//! Byte-level repair and control character filtering.

/// Decode bytes as UTF-8, silently dropping sequences that do not decode.
///
/// Unlike `String::from_utf8_lossy` no replacement character is inserted.
pub fn repair_encoding(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut dropped = 0usize;

    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        tracing::debug!(dropped_bytes = dropped, "dropped undecodable byte sequences");
    }

    out
}

/// True for the control characters a chat message may legitimately carry.
fn is_preserved_control(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t')
}

/// Drop every character below U+0020 except newline, carriage return and tab.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| (c as u32) >= 32 || is_preserved_control(c))
        .collect()
}

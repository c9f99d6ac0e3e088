//! Text sanitizer for markdown-rendering chat transports.
//!
//! [`sanitize`] turns arbitrary, possibly malformed text into text that is
//! safe to hand to the transport's markdown renderer. The stages run in a
//! fixed order because each one relies on what the previous stages
//! guaranteed:
//!
//! 1. coercion of non-text values ([`sanitize_debug`], [`sanitize_value`])
//! 2. encoding repair ([`repair_encoding`], for byte input)
//! 3. escape normalization ([`normalize_escapes`])
//! 4. literal escape to control conversion ([`convert_literal_escapes`])
//! 5. control character filtering ([`strip_control_chars`])
//! 6. markdown escaping ([`escape_markdown`])
//!
//! The sanitizer never fails. Anything it cannot turn into text becomes the
//! empty string.
//!
//! Output is not idempotent in general. A second pass re-reads the
//! backslashes the first pass left behind (an escaped `\\` followed by a
//! converted newline loses its backslash, for one), and [`escape_markdown`]
//! on its own double-escapes. Sanitize each message exactly once.

mod encoding;
mod escapes;
mod markdown;

pub use encoding::{repair_encoding, strip_control_chars};
pub use escapes::{convert_literal_escapes, normalize_escapes};
pub use markdown::{MARKDOWN_METACHARACTERS, escape_markdown};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Sanitizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Escape markdown metacharacters (disable for plain-text transports)
    pub escape_markdown: bool,

    /// Truncate input to this many characters before escape handling
    pub max_chars: Option<usize>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            escape_markdown: true,
            max_chars: None,
        }
    }
}

/// Stateless sanitizer bound to a [`SanitizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    config: SanitizerConfig,
}

impl Sanitizer {
    /// Create a sanitizer with the given settings.
    pub fn new(config: SanitizerConfig) -> Self {
        Self { config }
    }

    /// The settings this sanitizer applies.
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Sanitize a text value.
    pub fn sanitize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = match self.config.max_chars {
            Some(max) => truncate_chars(text, max),
            None => text,
        };

        let normalized = normalize_escapes(text);
        let converted = convert_literal_escapes(&normalized);
        let filtered = strip_control_chars(&converted);

        let out = if self.config.escape_markdown {
            escape_markdown(&filtered)
        } else {
            filtered
        };

        tracing::trace!(
            input_len = text.len(),
            output_len = out.len(),
            "sanitized text"
        );

        out
    }

    /// Sanitize raw bytes, dropping sequences that are not valid UTF-8.
    pub fn sanitize_bytes(&self, bytes: &[u8]) -> String {
        self.sanitize(&repair_encoding(bytes))
    }

    /// Sanitize the debug rendering of an arbitrary value.
    ///
    /// One layer of surrounding quotes is stripped, so a `&str` or `String`
    /// renders as its content with escapes spelled out as visible text,
    /// which the escape stages then handle. A value whose `Debug`
    /// implementation reports an error sanitizes to the empty string.
    pub fn sanitize_debug<T: fmt::Debug + ?Sized>(&self, value: &T) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{:?}", value).is_err() {
            tracing::debug!("debug rendering failed, sanitizing to empty text");
            return String::new();
        }

        self.sanitize(strip_surrounding_quotes(&rendered))
    }

    /// Sanitize a JSON value as delivered by a bot webhook payload.
    ///
    /// Strings are sanitized as-is, `null` becomes empty text and every
    /// other value is sanitized through its compact JSON rendering.
    pub fn sanitize_value(&self, value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(text) => self.sanitize(text),
            serde_json::Value::Null => String::new(),
            other => self.sanitize(strip_surrounding_quotes(&other.to_string())),
        }
    }
}

/// Sanitize text with the default settings.
pub fn sanitize(text: &str) -> String {
    Sanitizer::default().sanitize(text)
}

/// Sanitize raw bytes with the default settings.
pub fn sanitize_bytes(bytes: &[u8]) -> String {
    Sanitizer::default().sanitize_bytes(bytes)
}

/// Sanitize the debug rendering of a value with the default settings.
pub fn sanitize_debug<T: fmt::Debug + ?Sized>(value: &T) -> String {
    Sanitizer::default().sanitize_debug(value)
}

/// Sanitize a JSON value with the default settings.
pub fn sanitize_value(value: &serde_json::Value) -> String {
    Sanitizer::default().sanitize_value(value)
}

fn strip_surrounding_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize_bytes(b""), "");
    }

    #[test]
    fn test_plain_text_only_gets_markdown_escaping() {
        assert_eq!(sanitize("Olá, tudo bem?"), "Olá, tudo bem?");
        assert_eq!(sanitize("meu_email *agora*"), "meu\\_email \\*agora\\*");
    }

    #[test]
    fn test_hex_escape_token_is_preserved() {
        assert_eq!(
            sanitize("texto com \\x12 válido"),
            "texto com \\x12 válido"
        );
    }

    #[test]
    fn test_invalid_hex_escape_loses_backslash() {
        assert_eq!(sanitize("texto com \\xZZ"), "texto com xZZ");
    }

    #[test]
    fn test_literal_newlines_become_real() {
        assert_eq!(sanitize("linha 1\\nlinha 2"), "linha 1\nlinha 2");
        assert_eq!(sanitize("a\\r\\nb\\tc"), "a\r\nb\tc");
    }

    #[test]
    fn test_control_characters_are_stripped() {
        assert_eq!(sanitize("a\u{0}b\u{8}c\nd"), "abc\nd");
    }

    #[test]
    fn test_trailing_backslash_survives() {
        assert_eq!(sanitize("fim\\"), "fim\\");
    }

    #[test]
    fn test_markdown_runs_after_escape_handling() {
        // the backslash in `\_` is garbage and dropped, then `_` is escaped once
        assert_eq!(sanitize("a\\_b"), "a\\_b");
        assert_eq!(sanitize("\\*negrito\\*"), "\\*negrito\\*");
    }

    #[test]
    fn test_not_idempotent() {
        // `\\` is kept as a token, then its second backslash pairs with `n`
        let once = sanitize("a\\\\nb");
        assert_eq!(once, "a\\\nb");
        let twice = sanitize(&once);
        assert_eq!(twice, "a\nb");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_bytes_with_invalid_utf8() {
        assert_eq!(sanitize_bytes(b"pre\xffco *ok*"), "preco \\*ok\\*");
    }

    #[test]
    fn test_debug_coercion_strips_quotes() {
        assert_eq!(sanitize_debug("texto"), "texto");
        assert_eq!(sanitize_debug(&'x'), "x");
        assert_eq!(sanitize_debug(&42), "42");
        // Debug spells the newline as `\n`, which becomes a real newline again
        assert_eq!(sanitize_debug("a\nb"), "a\nb");
    }

    #[test]
    fn test_json_value_coercion() {
        assert_eq!(sanitize_value(&json!("a_b")), "a\\_b");
        assert_eq!(sanitize_value(&json!(null)), "");
        assert_eq!(sanitize_value(&json!(12.5)), "12.5");
        assert_eq!(sanitize_value(&json!(["x"])), "\\[\"x\"\\]");
    }

    #[test]
    fn test_config_without_markdown() {
        let sanitizer = Sanitizer::new(SanitizerConfig {
            escape_markdown: false,
            max_chars: None,
        });
        assert_eq!(sanitizer.sanitize("a_b\\nc"), "a_b\nc");
    }

    #[test]
    fn test_config_max_chars_truncates_on_char_boundary() {
        let sanitizer = Sanitizer::new(SanitizerConfig {
            escape_markdown: true,
            max_chars: Some(4),
        });
        assert_eq!(sanitizer.sanitize("ação_judicial"), "ação");
        assert_eq!(sanitizer.sanitize("ab"), "ab");
    }

    #[test]
    fn test_safe_text_invariant() {
        let input = "x\u{1}_y*\\q[`]\u{1f}\\n";
        let out = sanitize(input);
        assert!(
            out.chars()
                .all(|c| c as u32 >= 32 || matches!(c, '\n' | '\r' | '\t'))
        );
        let chars: Vec<char> = out.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if MARKDOWN_METACHARACTERS.contains(c) {
                assert!(i > 0 && chars[i - 1] == '\\', "unescaped {c:?} in {out:?}");
            }
        }
    }
}

//! Reading message text and conversations from arguments, files or stdin.

use is_terminal::IsTerminal;
use std::io::Read;
use std::path::Path;
use triagem::TriagemError;
use triagem::prelude::ConversationTurn;
use triagem::sanitizer::repair_encoding;

/// Use the positional text when given, otherwise read all of stdin.
pub fn read_text(text: Option<String>) -> triagem::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(TriagemError::Other(
            "No text given. Pass it as an argument or pipe it through stdin".to_string(),
        ));
    }

    read_text_from(stdin.lock())
}

/// Read raw bytes until EOF and decode them, dropping undecodable sequences.
pub fn read_text_from(mut reader: impl Read) -> triagem::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut buffer = repair_encoding(&bytes);

    // echo and here-strings add one trailing newline
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }

    Ok(buffer)
}

/// Parse a JSON array of turns.
///
/// Plain strings are accepted as turns without a timestamp, so
/// `["oi", "qual o preço?"]` works too.
pub fn parse_turns(json: &str) -> triagem::Result<Vec<ConversationTurn>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawTurn {
        Text(String),
        Turn(ConversationTurn),
    }

    let raw: Vec<RawTurn> = serde_json::from_str(json).map_err(|e| {
        TriagemError::Input(format!(
            "{} (expected a JSON array like [{{\"text\": \"...\"}}])",
            e
        ))
    })?;

    Ok(raw
        .into_iter()
        .map(|turn| match turn {
            RawTurn::Text(text) => ConversationTurn::new(text),
            RawTurn::Turn(turn) => turn,
        })
        .collect())
}

/// Collect the turns to score from `--message` flags, a file or stdin.
pub fn read_turns(
    file: Option<&Path>,
    messages: Vec<String>,
) -> triagem::Result<Vec<ConversationTurn>> {
    if !messages.is_empty() {
        return Ok(messages.into_iter().map(ConversationTurn::new).collect());
    }

    let json = match file {
        Some(path) => repair_encoding(&std::fs::read(path)?),
        None => read_text(None)?,
    };

    parse_turns(&json)
}

//! Handlers for commands that take one message

use crate::args::{SanitizeArgs, TextArgs};
use crate::context::TriagemCliContext;
use crate::input::read_text;
use crate::output::*;
use serde_json::json;
use triagem::prelude::*;

/// Sanitizer for the command flags, starting from the loaded configuration.
pub fn sanitizer_for(args: &SanitizeArgs, ctx: &TriagemCliContext) -> Sanitizer {
    let mut config = ctx.engine.config().sanitizer.clone();
    if args.plain {
        config.escape_markdown = false;
    }
    if args.max_chars.is_some() {
        config.max_chars = args.max_chars;
    }
    Sanitizer::new(config)
}

pub fn handle_sanitize_command(
    args: SanitizeArgs,
    ctx: &TriagemCliContext,
    output_format: OutputFormat,
) -> triagem::Result<()> {
    let sanitizer = sanitizer_for(&args, ctx);
    let text = read_text(args.text)?;
    let sanitized = sanitizer.sanitize(&text);

    match output_format {
        OutputFormat::Json => print_json(&json!({
            "input": text,
            "sanitized": sanitized,
        })),
        OutputFormat::Table => println!("{}", sanitized),
    }

    Ok(())
}

pub fn handle_intent_command(
    args: TextArgs,
    ctx: &TriagemCliContext,
    output_format: OutputFormat,
) -> triagem::Result<()> {
    let text = read_text(args.text)?;
    let intent = ctx.engine.detect_intent(&text);

    match output_format {
        OutputFormat::Json => print_json(&intent),
        OutputFormat::Table => print_intent(&intent),
    }

    Ok(())
}

pub fn handle_analyze_command(
    args: TextArgs,
    ctx: &TriagemCliContext,
    output_format: OutputFormat,
) -> triagem::Result<()> {
    let text = read_text(args.text)?;
    let analysis = ctx.engine.analyze(&text);

    match output_format {
        OutputFormat::Json => print_json(&analysis),
        OutputFormat::Table => print_analysis(&analysis),
    }

    Ok(())
}

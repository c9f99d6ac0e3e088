//! Entity extraction and tax id validation handlers

use crate::args::ExtractArgs;
use crate::commands::ValidateCommands;
use crate::context::TriagemCliContext;
use crate::input::read_text;
use crate::output::*;
use colored::*;
use serde_json::{Value, json};
use triagem::TriagemError;
use triagem::entity_extraction::digits_only;
use triagem::prelude::*;

/// Parse `--kind` values; an empty list keeps the configured kinds.
pub fn parse_kinds(kinds: &[String]) -> triagem::Result<Vec<EntityKind>> {
    kinds
        .iter()
        .map(|kind| kind.parse::<EntityKind>().map_err(TriagemError::Input))
        .collect()
}

/// Extractor for the command flags, starting from the loaded configuration.
pub fn extractor_for(
    args: &ExtractArgs,
    ctx: &TriagemCliContext,
) -> triagem::Result<PatternEntityExtractor> {
    let mut config = ctx.engine.config().extraction.clone();

    let kinds = parse_kinds(&args.kinds)?;
    if !kinds.is_empty() {
        config.enabled_kinds = kinds;
    }
    if args.dedup {
        config.deduplicate = true;
    }
    if let Some(threshold) = args.min_confidence {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(TriagemError::Input(format!(
                "confidence must be between 0.0 and 1.0, got {}",
                threshold
            )));
        }
        config.confidence_threshold = threshold;
    }

    Ok(PatternEntityExtractor::with_config(config))
}

pub fn handle_extract_command(
    args: ExtractArgs,
    ctx: &TriagemCliContext,
    output_format: OutputFormat,
) -> triagem::Result<()> {
    let extractor = extractor_for(&args, ctx)?;
    let text = read_text(args.text)?;
    let entities = extractor.extract_entities(&text);

    match output_format {
        OutputFormat::Json => print_json(&entities),
        OutputFormat::Table => print_entity_list(&entities),
    }

    Ok(())
}

/// Validation result as printed in JSON mode.
pub fn validation_report(kind: EntityKind, value: &str) -> Value {
    let valid = match kind {
        EntityKind::TaxIdCompany => validate_cnpj(value),
        _ => validate_cpf(value),
    };

    json!({
        "kind": kind,
        "input": value,
        "digits": digits_only(value),
        "valid": valid,
    })
}

pub fn handle_validate_command(
    cmd: ValidateCommands,
    output_format: OutputFormat,
) -> triagem::Result<()> {
    let (kind, label, value) = match cmd {
        ValidateCommands::Cpf(args) => (EntityKind::TaxIdPerson, "CPF", args.value),
        ValidateCommands::Cnpj(args) => (EntityKind::TaxIdCompany, "CNPJ", args.value),
    };

    let report = validation_report(kind, &value);

    match output_format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            if report["valid"] == Value::Bool(true) {
                println!("{}", format_success(&format!("{} {} is valid", label, value)));
            } else {
                println!("{}", format_error(&format!("{} {} is invalid", label, value)));
                println!(
                    "{}",
                    "Check digits do not match, or the length or digits are wrong."
                        .color(CliColors::muted())
                );
            }
        }
    }

    Ok(())
}

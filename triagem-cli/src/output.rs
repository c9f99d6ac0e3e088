use colored::*;
use serde::Serialize;
use serde_json::json;
use triagem::prelude::*;

/// Output format for command results.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, colored when attached to a terminal
    #[default]
    Table,
    /// Pretty-printed JSON for tool integration
    Json,
}

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn entity() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn intent() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

fn qualification_color(qualification: Qualification) -> Color {
    match qualification {
        Qualification::High => CliColors::success(),
        Qualification::Medium => CliColors::warning(),
        Qualification::Low => CliColors::muted(),
    }
}

/// Stable error code for a [`TriagemError`].
pub fn error_code(error: &TriagemError) -> &'static str {
    match error {
        TriagemError::Configuration(_) => "CONFIGURATION_ERROR",
        TriagemError::Logging(_) => "LOGGING_ERROR",
        TriagemError::Io(_) => "IO_ERROR",
        TriagemError::Input(_) => "INVALID_INPUT",
        TriagemError::Other(_) => "ERROR",
    }
}

/// Render an error as JSON on stdout or as a colored line on stderr.
pub fn output_error(error: &TriagemError, output_format: OutputFormat) {
    match output_format {
        OutputFormat::Json => {
            let error_response = json!({
                "error": true,
                "code": error_code(error),
                "message": error.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => eprintln!("{}", format_error(&error.to_string())),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_entity(entity: &ExtractedEntity) {
    let validity = match entity.valid {
        Some(true) => format!(" {}", "valid".color(CliColors::success())),
        Some(false) => format!(" {}", "invalid".color(CliColors::error())),
        None => String::new(),
    };

    println!(
        "  {} {} {} {}{}",
        format!("{:<16}", entity.kind.as_str()).color(CliColors::entity()).bold(),
        entity.text.color(CliColors::primary()),
        "→".color(CliColors::muted()),
        entity.value.to_string().color(CliColors::primary()),
        validity
    );
    println!(
        "  {:<16} {}",
        "",
        format!(
            "bytes {}..{}, confidence {:.2}",
            entity.start_pos, entity.end_pos, entity.confidence
        )
        .color(CliColors::muted())
    );
}

pub fn print_entity_list(entities: &[ExtractedEntity]) {
    if entities.is_empty() {
        println!("{}", format_info("No entities found."));
        return;
    }

    println!(
        "{}",
        format!("━━━ Entities ({}) ━━━", entities.len())
            .color(CliColors::entity())
            .bold()
    );
    for entity in entities {
        print_entity(entity);
    }
}

pub fn print_intent(intent: &Intent) {
    println!(
        "{}: {} {}",
        "Intent".color(CliColors::muted()),
        intent.category.as_str().color(CliColors::intent()).bold(),
        format!("(confidence {:.2})", intent.confidence).color(CliColors::muted())
    );
    if !intent.is_match() {
        println!("{}", format_warning("No intent keyword matched."));
    }
}

pub fn print_score(score: &IntentScore) {
    let color = qualification_color(score.qualification);

    println!(
        "{}: {}",
        "Score".color(CliColors::muted()),
        format!("{}/100", score.score).color(color).bold()
    );
    println!(
        "{}: {}",
        "Qualification".color(CliColors::muted()),
        score.qualification.to_string().color(color)
    );
    println!(
        "{}: {}",
        "Priority".color(CliColors::muted()),
        score.priority.to_string().color(color)
    );

    let signals = if score.signals.is_empty() {
        "none".to_string()
    } else {
        score
            .signals
            .iter()
            .map(LeadSignal::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!(
        "{}: {}",
        "Signals".color(CliColors::muted()),
        signals.color(CliColors::primary())
    );
    println!(
        "{}: {}",
        "Messages".color(CliColors::muted()),
        score.messages_scored.to_string().color(CliColors::primary())
    );
}

pub fn print_analysis(analysis: &MessageAnalysis) {
    println!("{}", "━━━ Sanitized ━━━".color(CliColors::info()).bold());
    println!("{}", analysis.sanitized);
    println!();
    print_entity_list(&analysis.entities);
    println!();
    print_intent(&analysis.intent);
    print_score(&analysis.lead);
}

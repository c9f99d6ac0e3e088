//! Command enum definitions

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Display version information
    Version,

    /// Make text safe for a markdown chat transport
    #[command(long_about = r#"
Repair, normalize and escape a message so a markdown chat transport can
render it verbatim.

Stray backslash escapes are dropped, literal \n \r \t become real line
breaks and tabs, control characters are removed and the markdown
metacharacters _ * [ ] ` are escaped.

Examples:
  triagem sanitize 'oferta *imperdível* hoje'
  echo 'linha 1\nlinha 2' | triagem sanitize --plain
"#)]
    Sanitize(SanitizeArgs),

    /// Extract emails, phones, tax ids, amounts, deadlines and process numbers
    #[command(alias = "entities")]
    Extract(ExtractArgs),

    /// Check CPF/CNPJ check digits
    #[command(subcommand)]
    Validate(ValidateCommands),

    /// Detect the intent of a message
    Intent(TextArgs),

    /// Score a conversation for lead routing
    #[command(long_about = r#"
Score a conversation with the keyword-weighted lead heuristic.

Turns come from --message (repeatable), from a JSON file given with --file,
or from stdin as a JSON array:

  [{"text": "Qual o preço?"}, {"text": "Preciso agendar uma demo", "timestamp": "2024-03-10T14:00:00Z"}]
"#)]
    Score(ScoreArgs),

    /// Run every component over one message
    Analyze(TextArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Validate an individual taxpayer id (11 digits)
    Cpf(TaxIdArgs),

    /// Validate a company taxpayer id (14 digits)
    Cnpj(TaxIdArgs),
}

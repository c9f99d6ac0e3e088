//! Command argument structures

use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct TextArgs {
    /// Message text (read from stdin when omitted)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct SanitizeArgs {
    /// Message text (read from stdin when omitted)
    pub text: Option<String>,

    /// Skip markdown escaping, for plain-text transports
    #[arg(long)]
    pub plain: bool,

    /// Truncate the input to this many characters first
    #[arg(long)]
    pub max_chars: Option<usize>,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Message text (read from stdin when omitted)
    pub text: Option<String>,

    /// Only extract these kinds (email, phone, cpf, cnpj, amount, deadline, process)
    #[arg(long = "kind", short = 'k')]
    pub kinds: Vec<String>,

    /// Collapse repeated entities with the same normalized value
    #[arg(long)]
    pub dedup: bool,

    /// Keep only entities at or above this confidence (0.0 to 1.0)
    #[arg(long)]
    pub min_confidence: Option<f32>,
}

#[derive(Args)]
pub struct TaxIdArgs {
    /// Tax id, with or without punctuation
    pub value: String,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// JSON file holding an array of turns like [{"text": "..."}]; stdin when omitted
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Score these messages instead of reading JSON (repeatable)
    #[arg(long = "message", short = 'm')]
    pub messages: Vec<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[clap(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

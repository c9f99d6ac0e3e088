use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::Level;
use triagem_cli::commands::Commands;
use triagem_cli::context::TriagemCliContext;
use triagem_cli::handlers::*;
use triagem_cli::output::{OutputFormat, output_error};

#[derive(Parser)]
#[command(name = "triagem")]
#[command(about = "Sanitize, mine and score chat-bot messages", long_about = None)]
#[command(version = triagem::VERSION)]
struct Cli {
    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli_args = Cli::parse();

    // Override output format with environment variable if set
    let output_format = match std::env::var("TRIAGEM_OUTPUT").as_deref() {
        Ok("json") => OutputFormat::Json,
        Ok("table") => OutputFormat::Table,
        _ => cli_args.output,
    };

    let is_quiet = cli_args.quiet
        || std::env::var("TRIAGEM_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    let log_level = if is_quiet {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(cli_args, output_format) {
        output_error(&error, output_format);
        std::process::exit(1);
    }
}

fn run(cli_args: Cli, output_format: OutputFormat) -> triagem::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("Triagem CLI v{}", triagem::VERSION);
            return Ok(());
        }

        Commands::Completions(args) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(
                clap_complete::Shell::from(args.shell),
                &mut command,
                name,
                &mut std::io::stdout(),
            );
            return Ok(());
        }

        Commands::Validate(cmd) => return handle_validate_command(cmd, output_format),

        _ => {}
    }

    let ctx = TriagemCliContext::new(cli_args.config.as_deref())?;

    match cli_args.command {
        Commands::Sanitize(args) => handle_sanitize_command(args, &ctx, output_format),
        Commands::Extract(args) => handle_extract_command(args, &ctx, output_format),
        Commands::Intent(args) => handle_intent_command(args, &ctx, output_format),
        Commands::Score(args) => handle_score_command(args, &ctx, output_format),
        Commands::Analyze(args) => handle_analyze_command(args, &ctx, output_format),
        Commands::Version | Commands::Completions(_) | Commands::Validate(_) => Ok(()),
    }
}

//! Conversation scoring handler

use crate::args::ScoreArgs;
use crate::context::TriagemCliContext;
use crate::input::read_turns;
use crate::output::*;

pub fn handle_score_command(
    args: ScoreArgs,
    ctx: &TriagemCliContext,
    output_format: OutputFormat,
) -> triagem::Result<()> {
    let turns = read_turns(args.file.as_deref(), args.messages)?;
    let score = ctx.engine.score_conversation(&turns);

    match output_format {
        OutputFormat::Json => print_json(&score),
        OutputFormat::Table => print_score(&score),
    }

    Ok(())
}

pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod input;
pub mod output;

pub use context::TriagemCliContext;
pub use input::{parse_turns, read_text, read_text_from, read_turns};
pub use output::{
    CliColors, OutputFormat, format_error, format_info, format_success, format_warning,
    output_error, print_analysis, print_entity_list, print_intent, print_score,
};

//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{AuthCommand, Cli, Commands};
pub use output::{
    format_history, format_home, format_identity, format_profile, format_record_line,
    format_saved, format_trends,
};
pub use prompt::InteractivePrompt;

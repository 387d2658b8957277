//! Command implementations for the tb CLI.
//!
//! This module contains the actual command handlers that are invoked by the
//! CLI.

pub mod board;
pub mod boards;
pub mod completions;
pub mod config;
pub mod done;
pub mod filter;
pub mod scan;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A named resource (board, file line) could not be found.
    #[error("{0}")]
    NotFound(String),

    /// Strict filter parsing error (only surfaced by `tb filter --check`).
    #[error("filter error: {0}")]
    Filter(#[from] taskboard_core_rs::filter::FilterError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common output settings.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

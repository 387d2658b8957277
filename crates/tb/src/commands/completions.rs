//! Completions command implementation.
//!
//! Generates shell completion scripts.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::Result;
use crate::cli::Cli;

/// Executes the completions command, writing the script to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tb", &mut std::io::stdout());
    Ok(())
}

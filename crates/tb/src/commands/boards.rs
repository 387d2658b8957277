//! Boards command implementation.
//!
//! Lists the configured boards.

use std::path::Path;

use owo_colors::OwoColorize;

use super::{config, CommandContext, Result};

/// Executes the boards command.
pub fn execute(ctx: &CommandContext, config_override: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_override)?;
    let boards = config::boards_or_default(&cfg);

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&boards)?);
        return Ok(());
    }

    if ctx.quiet {
        return Ok(());
    }

    for board in &boards {
        let columns: Vec<&str> = board.columns.iter().map(|c| c.name.as_str()).collect();
        println!(
            "{}  {} ({} columns: {})",
            board.id,
            board.name,
            board.columns.len(),
            columns.join(", ")
        );
        if !board.filter.is_match_all() {
            let filter_line = format!("    filter: {}", board.filter.query_string());
            if ctx.use_colors {
                println!("{}", filter_line.dimmed());
            } else {
                println!("{filter_line}");
            }
        }
    }

    Ok(())
}

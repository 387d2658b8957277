use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{board::BoardOptions, scan::ScanOptions, CommandContext, CommandError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);
    let config_override = cli.config.as_deref();

    match &cli.command {
        Commands::Scan {
            paths,
            include_tags,
            filter,
            completed,
            sort,
            reverse,
            limit,
            all,
        } => {
            let opts = ScanOptions {
                paths: paths.clone(),
                include_tags: include_tags.clone(),
                filter: filter.clone(),
                completed: *completed,
                sort: *sort,
                reverse: *reverse,
                limit: *limit,
                all: *all,
            };
            commands::scan::execute(&ctx, &opts, config_override).await
        }

        Commands::Board { paths, board } => {
            let opts = BoardOptions {
                paths: paths.clone(),
                board: board.clone(),
            };
            commands::board::execute(&ctx, &opts, config_override).await
        }

        Commands::Boards => commands::boards::execute(&ctx, config_override),

        Commands::Done { file, line } => commands::done::execute(&ctx, file, *line).await,

        Commands::Filter { query, check } => commands::filter::execute(&ctx, query, *check),

        Commands::Config { command } => {
            commands::config::execute(&ctx, command.as_ref(), config_override)
        }

        Commands::Completions { shell } => commands::completions::execute(*shell),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::NotFound(_) => "NOT_FOUND",
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::NotFound(_) => ExitCode::from(4),
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

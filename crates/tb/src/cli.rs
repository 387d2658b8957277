//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the tb CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// tb - markdown task boards in the terminal
#[derive(Parser, Debug)]
#[command(name = "tb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override config file path (default: ~/.config/tb/config.toml)
    #[arg(long, global = true, env = "TB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan markdown files and list the tasks found
    #[command(alias = "s")]
    Scan {
        /// Files or directories to scan (directories recurse into .md files)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only keep top-level tasks carrying one of these tags (repeatable;
        /// overrides the configured include tags)
        #[arg(short = 't', long = "include-tag", action = clap::ArgAction::Append)]
        include_tags: Vec<String>,

        /// Filter expression (e.g. "#in/wip AND NOT #blocked")
        #[arg(short, long)]
        filter: Option<String>,

        /// Show completed tasks instead of open ones
        #[arg(long)]
        completed: bool,

        /// Sort by field
        #[arg(long, value_enum)]
        sort: Option<SortField>,

        /// Reverse sort order
        #[arg(long)]
        reverse: bool,

        /// Limit results (default: 50)
        #[arg(long, default_value = "50")]
        limit: u32,

        /// Show all tasks (no limit)
        #[arg(long)]
        all: bool,
    },

    /// Render a configured board as terminal columns
    #[command(alias = "b")]
    Board {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Board id or name (default: first configured board)
        #[arg(short, long)]
        board: Option<String>,
    },

    /// List configured boards
    Boards,

    /// Toggle the completion checkbox on a task line
    #[command(alias = "d")]
    Done {
        /// The markdown file containing the task
        file: PathBuf,

        /// 1-based line number of the task
        line: usize,
    },

    /// Parse a filter expression and show its canonical form
    Filter {
        /// The filter expression to parse
        query: String,

        /// Exit nonzero when the expression does not parse strictly
        #[arg(long)]
        check: bool,
    },

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a starter config file
    Init,
}

/// Sort field for `tb scan`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    /// 📅 due date
    Due,
    /// ⏳ scheduled date
    Scheduled,
    /// ➕ creation date
    Created,
    /// ✅ completion date
    Completed,
    /// Display text
    Title,
}

//! Config command implementation.
//!
//! View and manage configuration settings. The config file lives at
//! `~/.config/tb/config.toml`; the `TB_CONFIG` environment variable or the
//! global `--config` flag override its location.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use taskboard_core_rs::filter::FilterParser;
use taskboard_core_rs::{Board, Column, ColumnKind, ShowDates};

use crate::cli::ConfigCommands;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to
/// the schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r##"# tb - taskboard CLI configuration

# Config schema version (do not modify)
version = 1

# Only scan in top-level tasks carrying one of these tags.
# Leave empty to include every task.
# include_tags = ["#todo", "#task"]

# Boards. Each board is a base filter plus columns; column filters use the
# same query language as `tb scan --filter`.
#
# [[boards]]
# id = "work"
# name = "Work"
# filter = { type = "tag", value = "#for/work" }
# hideFilterTags = ["#todo"]
#
# [[boards.columns]]
# id = "wip"
# name = "WIP"
# type = "filtered"
# statusTag = "#in/wip"
# filter = { type = "tag", value = "#in/wip" }
# sort = { key = "due", direction = "asc" }
"##;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Only scan in top-level tasks carrying one of these tags.
    #[serde(default)]
    pub include_tags: Vec<String>,

    /// Configured boards.
    #[serde(default)]
    pub boards: Vec<Board>,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            include_tags: Vec::new(),
            boards: Vec::new(),
        }
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/tb/ on all platforms.
fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("tb"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("tb"))
        .ok_or_else(|| CommandError::Config("could not determine config directory".to_string()))
}

/// Gets the config file path, honoring an explicit override.
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the configuration from disk. A missing file is the default config.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = config_path(override_path)?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("failed to read config: {e}")))?;

    toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("failed to parse config: {e}")))
}

/// The boards to use: the configured ones, or the built-in default board
/// when none are configured.
pub fn boards_or_default(config: &Config) -> Vec<Board> {
    if config.boards.is_empty() {
        vec![default_board()]
    } else {
        config.boards.clone()
    }
}

/// Built-in starter board: one catch-all column plus `#in/...` status
/// columns.
pub fn default_board() -> Board {
    let status_column = |id: &str, name: &str, tag: &str| Column {
        id: id.to_string(),
        name: name.to_string(),
        filter: FilterParser::parse(tag),
        kind: ColumnKind::Filtered,
        status_tag: Some(tag.to_string()),
        show_completed: None,
        sort: None,
    };

    Board {
        id: "default".to_string(),
        name: "Default".to_string(),
        filter: FilterParser::parse(""),
        columns: vec![
            Column {
                id: "all".to_string(),
                name: "All".to_string(),
                filter: FilterParser::parse(""),
                kind: ColumnKind::Filtered,
                status_tag: None,
                show_completed: None,
                sort: None,
            },
            status_column("backlog", "Backlog", "#in/backlog"),
            status_column("wip", "WIP", "#in/wip"),
            status_column("blocked", "Blocked", "#in/blocked"),
        ],
        hide_filter_tags: vec!["#todo".to_string()],
        show_dates: ShowDates::default(),
    }
}

/// Executes the config command.
pub fn execute(
    ctx: &CommandContext,
    command: Option<&ConfigCommands>,
    override_path: Option<&Path>,
) -> Result<()> {
    match command.unwrap_or(&ConfigCommands::Show) {
        ConfigCommands::Show => show(ctx, override_path),
        ConfigCommands::Path => {
            println!("{}", config_path(override_path)?.display());
            Ok(())
        }
        ConfigCommands::Init => init(ctx, override_path),
    }
}

/// Prints the resolved configuration.
fn show(ctx: &CommandContext, override_path: Option<&Path>) -> Result<()> {
    let config = load_config(override_path)?;
    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| CommandError::Config(format!("failed to render config: {e}")))?;
        print!("{rendered}");
    }
    Ok(())
}

/// Writes the starter config file unless one already exists.
fn init(ctx: &CommandContext, override_path: Option<&Path>) -> Result<()> {
    let path = config_path(override_path)?;
    if path.exists() {
        return Err(CommandError::Config(format!(
            "config file already exists at {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, DEFAULT_CONFIG)?;
    if !ctx.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

//! Board command implementation.
//!
//! Scans markdown files and renders one configured board as terminal
//! columns.

use std::path::{Path, PathBuf};

use strsim::levenshtein;

use taskboard_core_rs::{assign_columns, Board};

use super::{config, scan, CommandContext, CommandError, Result};
use crate::output::{format_board_json, format_board_table};

/// Maximum Levenshtein distance to consider a board name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Options for the board command.
#[derive(Debug)]
pub struct BoardOptions {
    /// Files or directories to scan.
    pub paths: Vec<PathBuf>,
    /// Board id or name; first configured board when absent.
    pub board: Option<String>,
}

/// Executes the board command.
pub async fn execute(
    ctx: &CommandContext,
    opts: &BoardOptions,
    config_override: Option<&Path>,
) -> Result<()> {
    let cfg = config::load_config(config_override)?;
    let boards = config::boards_or_default(&cfg);
    let board = resolve_board(&boards, opts.board.as_deref())?;

    let include_tags = scan::normalize_tags(cfg.include_tags);
    let store = scan::scan_paths(ctx, &opts.paths, &include_tags).await?;
    let buckets = assign_columns(board, store.all());

    if ctx.json_output {
        println!("{}", format_board_json(board, &buckets)?);
    } else if !ctx.quiet {
        print!("{}", format_board_table(board, &buckets, ctx.use_colors));
    }

    Ok(())
}

/// Resolves a board by id or name (case-insensitive), suggesting the
/// closest configured name on a miss.
fn resolve_board<'a>(boards: &'a [Board], query: Option<&str>) -> Result<&'a Board> {
    let Some(query) = query else {
        return boards
            .first()
            .ok_or_else(|| CommandError::NotFound("no boards configured".to_string()));
    };

    let query_lower = query.to_lowercase();
    if let Some(board) = boards
        .iter()
        .find(|b| b.id.to_lowercase() == query_lower || b.name.to_lowercase() == query_lower)
    {
        return Ok(board);
    }

    let suggestion = find_similar_name(query, boards.iter().map(|b| b.name.as_str()));
    let base = format!("board '{query}' not found");
    Err(CommandError::NotFound(match suggestion {
        Some(s) => format!("{base}. Did you mean '{s}'?"),
        None => base,
    }))
}

/// Finds the best matching name from a list of candidates using Levenshtein
/// distance. Returns the best match if its edit distance is within the
/// threshold.
fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_board(id: &str, name: &str) -> Board {
        let mut board = config::default_board();
        board.id = id.to_string();
        board.name = name.to_string();
        board
    }

    #[test]
    fn test_resolve_board_by_id_and_name() {
        let boards = vec![named_board("work", "Work"), named_board("home", "Home")];
        assert_eq!(resolve_board(&boards, Some("home")).unwrap().id, "home");
        assert_eq!(resolve_board(&boards, Some("WORK")).unwrap().id, "work");
    }

    #[test]
    fn test_resolve_board_defaults_to_first() {
        let boards = vec![named_board("work", "Work"), named_board("home", "Home")];
        assert_eq!(resolve_board(&boards, None).unwrap().id, "work");
    }

    #[test]
    fn test_resolve_board_suggests_close_names() {
        let boards = vec![named_board("work", "Work")];
        let err = resolve_board(&boards, Some("wrok")).unwrap_err();
        assert!(err.to_string().contains("Did you mean 'Work'?"));
    }

    #[test]
    fn test_resolve_board_no_suggestion_for_distant_names() {
        let boards = vec![named_board("work", "Work")];
        let err = resolve_board(&boards, Some("groceries")).unwrap_err();
        assert!(!err.to_string().contains("Did you mean"));
    }
}

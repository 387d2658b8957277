//! Scan command implementation.
//!
//! Collects markdown files, scans them into tasks, and lists the result,
//! optionally filtered and sorted.

use std::path::{Path, PathBuf};

use taskboard_core_rs::filter::{FilterExpression, FilterParser};
use taskboard_core_rs::{scanner, Task, TaskStore};

use super::{config, CommandContext, Result};
use crate::cli::SortField;
use crate::output::{format_tasks_json, format_tasks_table};

/// Options for the scan command.
#[derive(Debug)]
pub struct ScanOptions {
    /// Files or directories to scan.
    pub paths: Vec<PathBuf>,
    /// Include-tag override; falls back to the configured set when empty.
    pub include_tags: Vec<String>,
    /// Filter expression.
    pub filter: Option<String>,
    /// Show completed tasks instead of open ones.
    pub completed: bool,
    /// Sort field.
    pub sort: Option<SortField>,
    /// Reverse sort order.
    pub reverse: bool,
    /// Limit results.
    pub limit: u32,
    /// Show all tasks (no limit).
    pub all: bool,
}

/// Executes the scan command.
pub async fn execute(
    ctx: &CommandContext,
    opts: &ScanOptions,
    config_override: Option<&Path>,
) -> Result<()> {
    let cfg = config::load_config(config_override)?;
    let include_tags = normalize_tags(if opts.include_tags.is_empty() {
        cfg.include_tags
    } else {
        opts.include_tags.clone()
    });

    let store = scan_paths(ctx, &opts.paths, &include_tags).await?;
    let expr = parse_filter_with_warning(ctx, opts.filter.as_deref());

    let mut tasks: Vec<&Task> = store
        .all()
        .iter()
        .filter(|t| expr.matches(t))
        .filter(|t| t.is_complete == opts.completed)
        .collect();

    sort_tasks(&mut tasks, opts);
    let tasks = apply_limit(tasks, opts);

    if ctx.json_output {
        println!("{}", format_tasks_json(&tasks)?);
    } else if !ctx.quiet {
        print!("{}", format_tasks_table(&tasks, ctx.use_colors));
    }

    Ok(())
}

/// Parses a filter query, warning once when it only matches because of the
/// fail-open fallback.
pub(crate) fn parse_filter_with_warning(
    ctx: &CommandContext,
    query: Option<&str>,
) -> FilterExpression {
    let Some(query) = query else {
        return FilterExpression::match_all();
    };
    if let Err(e) = FilterParser::try_parse(query) {
        if !ctx.quiet {
            eprintln!("warning: {e}; filter matches everything");
        }
    }
    FilterParser::parse(query)
}

/// Ensures every tag carries its `#` prefix, so `--include-tag todo` and
/// `--include-tag '#todo'` mean the same thing.
pub(crate) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t.starts_with('#') {
                t
            } else {
                format!("#{t}")
            }
        })
        .collect()
}

/// Scans every markdown file under `paths` into a fresh store.
pub(crate) async fn scan_paths(
    ctx: &CommandContext,
    paths: &[PathBuf],
    include_tags: &[String],
) -> Result<TaskStore> {
    let mut files = Vec::new();
    for path in paths {
        collect_markdown_files(path, &mut files)?;
    }
    files.sort();
    files.dedup();

    let mut tasks = Vec::new();
    for file in &files {
        let content = tokio::fs::read_to_string(file).await?;
        let path_str = file.to_string_lossy();
        tasks.extend(scanner::scan(&content, &path_str, include_tags));
    }

    if ctx.verbose {
        eprintln!("Scanned {} tasks from {} files", tasks.len(), files.len());
    }

    let mut store = TaskStore::new();
    store.set_tasks(tasks);
    Ok(store)
}

/// Recursively collects `.md` files. Explicit file arguments are taken
/// as-is; hidden directories are skipped.
fn collect_markdown_files(path: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_dir() {
        out.push(path.to_path_buf());
        return Ok(());
    }
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        let child = entry.path();
        if child.is_dir() {
            collect_markdown_files(&child, out)?;
        } else if child.extension().is_some_and(|ext| ext == "md") {
            out.push(child);
        }
    }
    Ok(())
}

/// Sorts tasks by the requested field. Date fields compare ISO strings with
/// missing dates last; title compares case-insensitively.
fn sort_tasks(tasks: &mut [&Task], opts: &ScanOptions) {
    if let Some(field) = opts.sort {
        if field == SortField::Title {
            tasks.sort_by_key(|t| t.text.to_lowercase());
        } else {
            tasks.sort_by(|a, b| {
                match (date_field(a, field), date_field(b, field)) {
                    (None, None) => std::cmp::Ordering::Equal,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (Some(a), Some(b)) => a.cmp(b),
                }
            });
        }
    }

    if opts.reverse {
        tasks.reverse();
    }
}

fn date_field(task: &Task, field: SortField) -> Option<&str> {
    match field {
        SortField::Due => task.due_date.as_deref(),
        SortField::Scheduled => task.scheduled_date.as_deref(),
        SortField::Created => task.created_date.as_deref(),
        SortField::Completed => task.completed_date.as_deref(),
        SortField::Title => None,
    }
}

/// Applies the limit to the tasks.
fn apply_limit<'a>(tasks: Vec<&'a Task>, opts: &ScanOptions) -> Vec<&'a Task> {
    if opts.all {
        tasks
    } else {
        tasks.into_iter().take(opts.limit as usize).collect()
    }
}

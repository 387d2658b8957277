//! Board rendering as terminal columns.

use owo_colors::OwoColorize;
use serde_json::json;
use taskboard_core_rs::{Board, Task};

use super::helpers::{checkbox, format_due, format_progress, format_tags};

/// Renders a board column by column, with per-column task counts.
///
/// `buckets` comes from [`taskboard_core_rs::assign_columns`] and is indexed
/// parallel to `board.columns`. Tags listed in the board's `hideFilterTags`
/// are omitted from cards; date roles obey the board's `showDates`.
pub fn format_board_table(board: &Board, buckets: &[Vec<&Task>], use_colors: bool) -> String {
    let mut out = String::new();

    let total: usize = buckets.iter().map(Vec::len).sum();
    let header = format!("{} — {} tasks", board.name, total);
    if use_colors {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for (column, tasks) in board.columns.iter().zip(buckets) {
        out.push('\n');
        let title = format!("{} ({})", column.name, tasks.len());
        if use_colors {
            out.push_str(&title.underline().to_string());
        } else {
            out.push_str(&title);
        }
        out.push('\n');

        for task in tasks {
            out.push_str(&format_card(board, task, use_colors));
        }
    }

    if total == 0 {
        out.push_str("\nNo tasks found. Try adjusting filters or rescanning.\n");
    }

    out
}

/// One task card line (plus note lines) inside a column.
fn format_card(board: &Board, task: &Task, use_colors: bool) -> String {
    let mut line = format!("  {} {}", checkbox(task.is_complete), task.text);

    let done_subtasks = task.subtasks.iter().filter(|s| s.is_complete).count();
    let progress = format_progress(done_subtasks, task.subtasks.len());
    if !progress.is_empty() {
        line.push_str(&format!(" [{progress}]"));
    }

    let tags = format_tags(&task.tags, &board.hide_filter_tags, use_colors);
    if !tags.is_empty() {
        line.push_str(&format!("  {tags}"));
    }

    let show = &board.show_dates;
    if show.due {
        let due = format_due(task.due_date.as_deref(), use_colors);
        if !due.is_empty() {
            line.push_str(&format!("  📅 {due}"));
        }
    }
    if show.scheduled {
        if let Some(date) = &task.scheduled_date {
            line.push_str(&format!("  ⏳ {date}"));
        }
    }
    if show.created {
        if let Some(date) = &task.created_date {
            line.push_str(&format!("  ➕ {date}"));
        }
    }
    if show.completed {
        if let Some(date) = &task.completed_date {
            line.push_str(&format!("  ✅ {date}"));
        }
    }

    line.push('\n');
    line
}

/// Serializes a board and its buckets as JSON for machine consumers.
pub fn format_board_json(
    board: &Board,
    buckets: &[Vec<&Task>],
) -> Result<String, serde_json::Error> {
    let columns: Vec<serde_json::Value> = board
        .columns
        .iter()
        .zip(buckets)
        .map(|(column, tasks)| {
            json!({
                "id": column.id,
                "name": column.name,
                "tasks": tasks,
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "id": board.id,
        "name": board.name,
        "columns": columns,
    }))
}

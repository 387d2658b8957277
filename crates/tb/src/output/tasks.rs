//! Task list formatting.

use owo_colors::OwoColorize;
use taskboard_core_rs::Task;

use super::helpers::{checkbox, format_due, format_progress, format_tags};

/// Formats tasks as a plain table, one line per task.
pub fn format_tasks_table(tasks: &[&Task], use_colors: bool) -> String {
    let mut out = String::new();

    for task in tasks {
        let mut line = format!("{} {}", checkbox(task.is_complete), task.text);

        let done_subtasks = task.subtasks.iter().filter(|s| s.is_complete).count();
        let progress = format_progress(done_subtasks, task.subtasks.len());
        if !progress.is_empty() {
            line.push_str(&format!(" [{progress}]"));
        }

        let tags = format_tags(&task.tags, &[], use_colors);
        if !tags.is_empty() {
            line.push_str(&format!("  {tags}"));
        }

        let due = format_due(task.due_date.as_deref(), use_colors);
        if !due.is_empty() {
            line.push_str(&format!("  📅 {due}"));
        }

        let location = format!("{}:{}", task.filepath, task.line_number);
        if use_colors {
            line.push_str(&format!("  {}", location.dimmed()));
        } else {
            line.push_str(&format!("  ({location})"));
        }

        out.push_str(&line);
        out.push('\n');
    }

    if tasks.is_empty() {
        out.push_str("No tasks found.\n");
    }

    out
}

/// Formats tasks as pretty-printed JSON.
pub fn format_tasks_json(tasks: &[&Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tasks)
}

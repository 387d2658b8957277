//! Common helper functions for output formatting.

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

/// The checkbox cell for a task or subtask.
pub fn checkbox(is_complete: bool) -> &'static str {
    if is_complete {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Formats a due date for display, relative to today.
pub fn format_due(due_date: Option<&str>, use_colors: bool) -> String {
    let Some(date_str) = due_date else {
        return String::new();
    };

    let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
        return date_str.to_string();
    };

    let today = Local::now().date_naive();
    let tomorrow = today + chrono::Duration::days(1);
    let yesterday = today - chrono::Duration::days(1);

    let display = if date == today {
        "Today".to_string()
    } else if date == tomorrow {
        "Tomorrow".to_string()
    } else if date == yesterday {
        "Yesterday".to_string()
    } else if date < today {
        let days = (today - date).num_days();
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    } else {
        date.format("%b %d").to_string()
    };

    if use_colors {
        if date < today {
            display.red().to_string()
        } else if date == today {
            display.yellow().to_string()
        } else {
            display
        }
    } else {
        display
    }
}

/// Formats a task's tags for display, skipping the hidden ones.
pub fn format_tags(tags: &[String], hidden: &[String], use_colors: bool) -> String {
    let visible: Vec<&str> = tags
        .iter()
        .filter(|t| !hidden.contains(t))
        .map(|t| t.as_str())
        .collect();
    if visible.is_empty() {
        return String::new();
    }
    let joined = visible.join(" ");
    if use_colors {
        joined.cyan().to_string()
    } else {
        joined
    }
}

/// Subtask progress cell like `2/3`, empty when there are no subtasks.
pub fn format_progress(done: usize, total: usize) -> String {
    if total == 0 {
        String::new()
    } else {
        format!("{done}/{total}")
    }
}

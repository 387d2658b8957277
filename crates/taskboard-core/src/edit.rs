//! Pure line-edit helpers for writing task changes back to markdown.
//!
//! The host owns file I/O; these functions transform lines and documents as
//! strings and leave reading and writing to the caller. Timestamps are
//! parameters, so the results are fully determined by the inputs.

use chrono::NaiveDateTime;

use crate::scanner::dates::{first_stamp_span, COMPLETED_MARKER};
use crate::text::collapse_ws_runs;

/// Appends `tag` to the line unless the line already contains it.
pub fn add_tag_to_line(line: &str, tag: &str) -> String {
    if line.contains(tag) {
        line.to_string()
    } else {
        format!("{line} {tag}").trim().to_string()
    }
}

/// Removes occurrences of `tag` from the line.
///
/// An occurrence must be preceded by start-of-line or whitespace and must
/// not continue into a longer tag (`#in` does not match inside `#in/wip`).
/// Whitespace left behind is collapsed and the end of the line trimmed;
/// leading indentation wider than one character collapses with it.
pub fn remove_tag_from_line(line: &str, tag: &str) -> String {
    if tag.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    for (pos, _) in line.match_indices(tag) {
        if pos < copied {
            continue;
        }
        let before = line[..pos].chars().next_back();
        if !before.is_none_or(char::is_whitespace) {
            continue;
        }
        let after = line[pos + tag.len()..].chars().next();
        let continues_tag =
            after.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/');
        if continues_tag {
            continue;
        }
        // Replace the span, preceding whitespace included, with one space.
        let start = before.map_or(pos, |c| pos - c.len_utf8());
        out.push_str(&line[copied..start]);
        out.push(' ');
        copied = pos + tag.len();
    }
    out.push_str(&line[copied..]);
    collapse_ws_runs(&out).trim_end().to_string()
}

/// Toggles the completion checkbox on a task line.
///
/// Completing switches `- [ ]` to `- [x]` and appends a
/// `✅ YYYY-MM-DD HH:MM` stamp built from `now`; reopening switches the
/// checkbox back and removes the first completion stamp on the line.
pub fn toggle_completion(line: &str, now: NaiveDateTime) -> String {
    if is_checked(line) {
        let reopened = uncheck(line);
        remove_completion_stamp(&reopened)
    } else {
        let checked = line.replacen("- [ ]", "- [x]", 1);
        format!("{checked} {COMPLETED_MARKER} {}", now.format("%Y-%m-%d %H:%M"))
    }
}

/// True when the line carries a checked box.
fn is_checked(line: &str) -> bool {
    line.contains("- [x]") || line.contains("- [X]")
}

/// Replaces the first checked box with an open one.
fn uncheck(line: &str) -> String {
    let pos = match (line.find("- [x]"), line.find("- [X]")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    };
    match pos {
        Some(p) => format!("{}- [ ]{}", &line[..p], &line[p + 5..]),
        None => line.to_string(),
    }
}

/// Removes the first `✅ YYYY-MM-DD[ HH:MM]` stamp, leading space included.
fn remove_completion_stamp(line: &str) -> String {
    match first_stamp_span(line, COMPLETED_MARKER) {
        Some((start, end)) => format!("{}{}", &line[..start], &line[end..]),
        None => line.to_string(),
    }
}

/// Replaces the 1-based `line_number` of `content` with `new_text`.
///
/// The replacement may span multiple lines. Line terminators are normalized
/// to `\n`. Returns `None` when the line number is out of range.
pub fn replace_line(content: &str, line_number: usize, new_text: &str) -> Option<String> {
    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    if line_number == 0 || line_number > lines.len() {
        return None;
    }
    let replacement = new_text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l));
    lines.splice(line_number - 1..line_number, replacement);
    Some(lines.join("\n"))
}

/// Wraps a line in `<del>` markers unless it is already struck.
pub fn strike_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with("<del>") && trimmed.ends_with("</del>") {
        line.to_string()
    } else {
        format!("<del>{line}</del>")
    }
}

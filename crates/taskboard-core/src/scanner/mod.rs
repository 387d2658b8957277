//! Indentation-aware markdown task scanner.
//!
//! Turns raw document text into an ordered list of [`Task`]s. Checkbox lines
//! (`- [ ]` / `- [x]`) open tasks; more-indented checkbox lines become
//! subtasks of the nearest enclosing task; more-indented plain lines become
//! notes. Tags and role-marked dates are extracted off the line text as part
//! of the scan.
//!
//! The scan is a single pass: a stack of `(indent, task index)` frames tracks
//! the currently open tasks, and a line indented at or left of the top frame
//! always closes it. Only one level of subtask nesting is modeled — a
//! checkbox under a subtask is a sibling subtask of the same task.

pub mod dates;
pub mod tags;

use crate::task::{Subtask, Task};

pub use dates::{extract_dates, ExtractedDates};
pub use tags::{extract_tags, strip_tags};

/// Columns a tab counts for when measuring indentation.
const TAB_WIDTH: usize = 2;

/// Scans `content` into tasks, using `path` to build task identities.
///
/// When `include_tags` is non-empty, a top-level checkbox line is kept only
/// if it shares at least one tag with the set; excluded tasks take their
/// nested lines with them. Line terminators `\n` and `\r\n` are both
/// accepted.
pub fn scan(content: &str, path: &str, include_tags: &[String]) -> Vec<Task> {
    let mut tasks: Vec<Task> = Vec::new();
    // (indent, index into tasks) frames for the open tasks, innermost last.
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for (idx, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let line_number = idx + 1;

        if let Some(cb) = parse_checkbox(line) {
            while stack.last().is_some_and(|&(indent, _)| cb.indent <= indent) {
                stack.pop();
            }

            if let Some(&(_, owner)) = stack.last() {
                // Nested checkbox: subtask of the innermost open task. Dates
                // on subtasks are stripped from the text but not kept.
                let sub_tags = tags::extract_tags(cb.tail);
                let stripped = tags::strip_tags(cb.tail);
                let text = dates::extract_dates(&stripped).text;
                tasks[owner].subtasks.push(Subtask {
                    text,
                    is_complete: cb.is_complete,
                    tags: sub_tags,
                    line_number,
                });
                // Subtasks never open a frame of their own.
            } else {
                let tag_list = tags::extract_tags(cb.tail);
                if !include_tags.is_empty()
                    && !include_tags.iter().any(|t| tag_list.contains(t))
                {
                    // Excluded task: no frame is pushed, so lines nested
                    // under it find no parent and fall away.
                    continue;
                }
                let stripped = tags::strip_tags(cb.tail);
                let extracted = dates::extract_dates(&stripped);
                stack.push((cb.indent, tasks.len()));
                tasks.push(Task {
                    id: Task::make_id(path, line_number),
                    filepath: path.to_string(),
                    line_number,
                    text: extracted.text,
                    is_complete: cb.is_complete,
                    tags: tag_list,
                    subtasks: Vec::new(),
                    notes: Vec::new(),
                    created_date: extracted.created,
                    scheduled_date: extracted.scheduled,
                    due_date: extracted.due,
                    completed_date: extracted.completed,
                });
            }
            continue;
        }

        // Plain line: a note when nested under an open task, otherwise it
        // closes every frame at or right of its indent.
        let (prefix, rest) = split_indent(line);
        let indent = indent_width(prefix);
        match stack.last() {
            Some(&(top, owner)) if indent > top => {
                let note = strip_list_marker(rest.trim_end()).trim();
                if !note.is_empty() {
                    tasks[owner].notes.push(note.to_string());
                }
            }
            _ => {
                while stack.last().is_some_and(|&(top, _)| indent <= top) {
                    stack.pop();
                }
            }
        }
    }

    tasks
}

/// A recognized checkbox line.
struct CheckboxLine<'a> {
    indent: usize,
    is_complete: bool,
    tail: &'a str,
}

/// Splits a line into its leading space/tab prefix and the rest.
fn split_indent(line: &str) -> (&str, &str) {
    let end = line
        .find(|c| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    line.split_at(end)
}

/// Measures indentation in columns, tabs counting as [`TAB_WIDTH`].
fn indent_width(prefix: &str) -> usize {
    prefix
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Matches `- [ ]`, `- [x]`, or `- [X]` followed by at least one whitespace
/// character. The tail excludes that whitespace run.
fn parse_checkbox(line: &str) -> Option<CheckboxLine<'_>> {
    let (prefix, rest) = split_indent(line);
    let rest = rest.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let is_complete = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix(']')?;
    let tail = rest.trim_start_matches(char::is_whitespace);
    if tail.len() == rest.len() {
        // No whitespace after the checkbox; not a task line.
        return None;
    }
    Some(CheckboxLine {
        indent: indent_width(prefix),
        is_complete,
        tail,
    })
}

/// Strips one leading list marker (`-`, `*`, or `+` plus whitespace).
fn strip_list_marker(text: &str) -> &str {
    let Some(rest) = text.strip_prefix(['-', '*', '+']) else {
        return text;
    };
    let trimmed = rest.trim_start_matches(char::is_whitespace);
    if trimmed.len() == rest.len() {
        // Marker without following whitespace is ordinary text.
        text
    } else {
        trimmed
    }
}

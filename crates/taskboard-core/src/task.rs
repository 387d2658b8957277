//! Task records produced by the markdown scanner.

use serde::{Deserialize, Serialize};

/// A nested checkbox line owned by a task.
///
/// Subtasks are modeled one level deep: a checkbox indented below a subtask
/// is recorded as another subtask of the same owning task, not as a
/// grandchild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    /// Display text with tags and date markers stripped.
    pub text: String,

    /// Whether the checkbox is marked `[x]`.
    pub is_complete: bool,

    /// Tags on the subtask line, `#`-prefixed, in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// 1-based line number of the subtask in its source document.
    pub line_number: usize,
}

/// A top-level checkbox line together with everything nested under it.
///
/// A task's identity is the `(filepath, line_number)` pair at scan time,
/// stringified as `"path:line"` in [`Task::id`]. Line numbers go stale if
/// the source is edited without rescanning; tracking that is the host's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable key, `"{filepath}:{line_number}"`.
    pub id: String,

    /// Path of the document the task was scanned from, verbatim.
    pub filepath: String,

    /// 1-based line number of the opening checkbox line.
    pub line_number: usize,

    /// Display text with tags and date markers stripped.
    pub text: String,

    /// Whether the checkbox is marked `[x]`.
    pub is_complete: bool,

    /// Tags on the task line, `#`-prefixed, deduplicated, first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Nested checkbox lines, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,

    /// Nested plain-text lines, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    /// `➕` creation date, ISO `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    /// `⏳` scheduled date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,

    /// `📅` due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// `✅` completion date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl Task {
    /// Builds the identity key for a task at `line_number` of `filepath`.
    pub fn make_id(filepath: &str, line_number: usize) -> String {
        format!("{filepath}:{line_number}")
    }

    /// True when the task carries `tag` exactly (including the `#` prefix).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

//! Board and column configuration, plus column assembly.
//!
//! Boards are configured by the host (settings file, UI) and persisted as
//! JSON/TOML in the shape defined here: each column embeds one
//! [`FilterExpression`] plus an optional sort spec. Assembly is the pure
//! half of rendering a board: it decides which tasks land in which column
//! and in what order, and leaves drawing to the host.

use serde::{Deserialize, Serialize};

use crate::filter::{evaluate, FilterExpression};
use crate::task::Task;

/// How a column treats completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Shows open tasks matching the column filter.
    Filtered,
    /// Shows completed tasks matching the column filter.
    Completed,
}

/// Sort key for tasks within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `📅` due date.
    Due,
    /// `⏳` scheduled date.
    Scheduled,
    /// `➕` creation date.
    Created,
    /// `✅` completion date.
    Completed,
    /// Case-insensitive display text.
    Title,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (earliest date / A-Z first).
    Asc,
    /// Descending.
    Desc,
}

/// Optional per-column ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// What to sort by.
    pub key: SortKey,
    /// Which way.
    pub direction: SortDirection,
}

/// One column of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Stable column id, unique within its board.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Tasks must match this to appear in the column.
    pub filter: FilterExpression,

    /// Completion handling for the column.
    #[serde(rename = "type")]
    pub kind: ColumnKind,

    /// Tag this column stands for when the host moves a task into it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_tag: Option<String>,

    /// Show completed tasks instead of open ones (overrides a `filtered`
    /// kind).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_completed: Option<bool>,

    /// Ordering within the column; document order when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl Column {
    /// True when this column shows completed tasks rather than open ones.
    pub fn shows_completed(&self) -> bool {
        self.show_completed == Some(true) || self.kind == ColumnKind::Completed
    }
}

/// Which extracted dates the host should display on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDates {
    /// Show `📅` dates.
    pub due: bool,
    /// Show `⏳` dates.
    pub scheduled: bool,
    /// Show `➕` dates.
    pub created: bool,
    /// Show `✅` dates.
    pub completed: bool,
}

impl Default for ShowDates {
    fn default() -> Self {
        Self {
            due: true,
            scheduled: true,
            created: true,
            completed: true,
        }
    }
}

/// A named board: a base filter plus its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Stable board id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base filter every column applies on top of.
    pub filter: FilterExpression,

    /// Columns, in display order.
    pub columns: Vec<Column>,

    /// Tags hidden on rendered cards; they drive membership, not display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide_filter_tags: Vec<String>,

    /// Which date roles to display.
    #[serde(default)]
    pub show_dates: ShowDates,
}

/// Buckets `tasks` into the board's columns.
///
/// A task lands in every column whose filter it matches; membership is not
/// exclusive. Each returned list corresponds to the column at the same
/// index. Within a column, tasks keep document order unless the column
/// carries a sort spec.
pub fn assign_columns<'a>(board: &Board, tasks: &'a [Task]) -> Vec<Vec<&'a Task>> {
    board
        .columns
        .iter()
        .map(|col| {
            let mut bucket: Vec<&Task> = tasks
                .iter()
                .filter(|t| evaluate(t, &board.filter))
                .filter(|t| evaluate(t, &col.filter))
                .filter(|t| t.is_complete == col.shows_completed())
                .collect();
            if let Some(spec) = col.sort {
                bucket.sort_by(|a, b| compare_tasks(a, b, spec));
            }
            bucket
        })
        .collect()
}

/// Column ordering: date keys compare ISO strings with missing dates last;
/// the missing-date placement and the title fallback ignore direction.
fn compare_tasks(a: &Task, b: &Task, spec: SortSpec) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    let directed = |ord: Ordering| match spec.direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    };

    if spec.key == SortKey::Title {
        return directed(title_key(a).cmp(&title_key(b)));
    }

    match (date_for(a, spec.key), date_for(b, spec.key)) {
        (Some(ad), Some(bd)) => directed(ad.cmp(bd)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => title_key(a).cmp(&title_key(b)),
    }
}

fn title_key(task: &Task) -> String {
    task.text.to_lowercase()
}

/// The task's date for a sort key; ISO strings compare chronologically.
fn date_for(task: &Task, key: SortKey) -> Option<&str> {
    match key {
        SortKey::Due => task.due_date.as_deref(),
        SortKey::Scheduled => task.scheduled_date.as_deref(),
        SortKey::Created => task.created_date.as_deref(),
        SortKey::Completed => task.completed_date.as_deref(),
        SortKey::Title => None,
    }
}

//! Filter evaluation against scanned tasks.

use super::ast::FilterExpression;
use crate::task::Task;

/// Returns true when `task` satisfies `expr`.
///
/// Pure and total: every variant has a defined truth value, nothing is
/// mutated, and no input can fail. The childless-OR form is the deliberate
/// match-all fallback produced for empty and malformed queries.
pub fn evaluate(task: &Task, expr: &FilterExpression) -> bool {
    match expr {
        FilterExpression::Tag { value } => !value.is_empty() && task.has_tag(value),
        FilterExpression::Empty => task.tags.is_empty(),
        FilterExpression::And { children } => children.iter().all(|c| evaluate(task, c)),
        FilterExpression::Or { children } => {
            children.is_empty() || children.iter().any(|c| evaluate(task, c))
        }
        FilterExpression::Not { children } => match children.first() {
            Some(child) => !evaluate(task, child),
            // A childless NOT cannot come out of the parser; match rather
            // than hide the task.
            None => true,
        },
        // Expression kinds from newer versions match everything.
        FilterExpression::Unknown => true,
    }
}

/// Filters a slice of tasks, keeping those that match `expr`.
pub fn filter_tasks<'a>(tasks: &'a [Task], expr: &FilterExpression) -> Vec<&'a Task> {
    tasks.iter().filter(|t| evaluate(t, expr)).collect()
}

impl FilterExpression {
    /// Returns true when `task` satisfies this expression.
    pub fn matches(&self, task: &Task) -> bool {
        evaluate(task, self)
    }
}

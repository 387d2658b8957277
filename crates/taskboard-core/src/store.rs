//! In-memory task collection shared by scans and board assembly.

use crate::task::Task;

/// Holds the tasks from the most recent scans, keyed by task id.
///
/// Insertion order is preserved: a full rescan replaces everything, a
/// single-document rescan swaps that file's tasks out without touching the
/// rest, and upserting an existing id keeps its position. The store never
/// re-sorts; ordering is whatever the scans produced.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Inserts a task, replacing any existing task with the same id in
    /// place.
    pub fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Removes the task with the given id, if present.
    pub fn remove(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Drops every task scanned from `path` and appends `tasks` in their
    /// place. This is the rescan path for a single changed document.
    pub fn replace_file_tasks(&mut self, path: &str, tasks: Vec<Task>) {
        self.tasks.retain(|t| t.filepath != path);
        self.tasks.extend(tasks);
    }

    /// All tasks, in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

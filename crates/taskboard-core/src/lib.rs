//! Markdown task scanning and board filtering.
//!
//! This crate is the engine behind the `tb` CLI: it turns markdown documents
//! into an ordered forest of tasks — nested subtasks, free-form notes, tags,
//! and role-marked dates included — and evaluates a small boolean filter
//! language over the result to route tasks into board columns.
//!
//! The engine is deterministic and host-independent: no I/O, no clocks, no
//! hidden state. Given the same document text and filter string, the outputs
//! are always identical. Hosts feed it text and keep the results; see
//! [`scanner`], [`filter`], and [`board`].
//!
//! # Example
//!
//! ```
//! use taskboard_core_rs::filter::FilterParser;
//! use taskboard_core_rs::scanner;
//!
//! let doc = "- [ ] Write report #in/wip 📅 2024-03-15\n  - [ ] Outline\n";
//! let tasks = scanner::scan(doc, "notes/todo.md", &[]);
//!
//! assert_eq!(tasks[0].text, "Write report");
//! assert_eq!(tasks[0].due_date.as_deref(), Some("2024-03-15"));
//! assert_eq!(tasks[0].subtasks[0].text, "Outline");
//!
//! let expr = FilterParser::parse("#in/wip AND NOT #blocked");
//! assert!(expr.matches(&tasks[0]));
//! ```

pub mod board;
pub mod edit;
pub mod filter;
pub mod scanner;
pub mod store;
pub mod task;

mod text;

pub use board::{assign_columns, Board, Column, ColumnKind, ShowDates, SortDirection, SortKey, SortSpec};
pub use filter::{FilterExpression, FilterParser};
pub use store::TaskStore;
pub use task::{Subtask, Task};

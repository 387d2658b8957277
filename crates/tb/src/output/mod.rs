//! Output formatting for the tb CLI.

pub mod board;
pub mod helpers;
pub mod tasks;

pub use board::{format_board_json, format_board_table};
pub use tasks::{format_tasks_json, format_tasks_table};

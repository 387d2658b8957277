//! Done command implementation.
//!
//! Toggles the completion checkbox on one task line and writes the file
//! back.

use std::path::Path;

use chrono::Local;

use taskboard_core_rs::edit;

use super::{CommandContext, CommandError, Result};

/// Executes the done command.
pub async fn execute(ctx: &CommandContext, file: &Path, line_number: usize) -> Result<()> {
    let content = tokio::fs::read_to_string(file).await?;

    let target = content
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .nth(line_number.wrapping_sub(1))
        .ok_or_else(|| {
            CommandError::NotFound(format!(
                "{}:{line_number} is past the end of the file",
                file.display()
            ))
        })?;

    let toggled = edit::toggle_completion(target, Local::now().naive_local());
    let updated = edit::replace_line(&content, line_number, &toggled).ok_or_else(|| {
        CommandError::NotFound(format!("{}:{line_number} is out of range", file.display()))
    })?;

    tokio::fs::write(file, updated).await?;

    if !ctx.quiet {
        println!("{}", toggled.trim_start());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_ctx() -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn test_done_toggles_line_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.md");
        fs::write(&path, "- [ ] first\n- [ ] second\n").unwrap();

        execute(&test_ctx(), &path, 2).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines[0], "- [ ] first");
        assert!(lines[1].starts_with("- [x] second ✅ "));
    }

    #[tokio::test]
    async fn test_done_reopens_completed_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.md");
        fs::write(&path, "- [x] shipped ✅ 2024-03-01 10:00\n").unwrap();

        execute(&test_ctx(), &path, 1).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("- [ ] shipped"));
        assert!(!content.contains('✅'));
    }

    #[tokio::test]
    async fn test_done_out_of_range_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.md");
        fs::write(&path, "- [ ] only\n").unwrap();

        let result = execute(&test_ctx(), &path, 9).await;
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }
}

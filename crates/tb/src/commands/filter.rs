//! Filter command implementation.
//!
//! Parses a filter expression and shows its canonical form, for debugging
//! board configuration.

use taskboard_core_rs::filter::{FilterExpression, FilterParser};

use super::{CommandContext, Result};

/// Executes the filter command.
///
/// With `--check`, a query that only parses through the fail-open fallback
/// is an error; otherwise the degraded match-all expression is shown with a
/// warning, exactly as the board commands would use it.
pub fn execute(ctx: &CommandContext, query: &str, check: bool) -> Result<()> {
    let expr = match FilterParser::try_parse(query) {
        Ok(expr) => expr,
        Err(e) => {
            if check {
                return Err(e.into());
            }
            if !ctx.quiet {
                eprintln!("warning: {e}; filter matches everything");
            }
            FilterExpression::match_all()
        }
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&expr)?);
    } else if !ctx.quiet {
        let canonical = expr.query_string();
        if canonical.is_empty() {
            println!("Expression: (match all)");
        } else {
            println!("Expression: {canonical}");
        }
        println!("Tree: {}", serde_json::to_string(&expr)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;

    fn test_ctx() -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_query_passes_check() {
        assert!(execute(&test_ctx(), "#a AND NOT #b", true).is_ok());
    }

    #[test]
    fn test_malformed_query_fails_check() {
        let result = execute(&test_ctx(), "(#a OR", true);
        assert!(matches!(result, Err(CommandError::Filter(_))));
    }

    #[test]
    fn test_malformed_query_degrades_without_check() {
        assert!(execute(&test_ctx(), "(#a OR", false).is_ok());
    }
}

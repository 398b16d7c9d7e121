//! Implementation of the `broom ignore` command.

use crate::cli::IgnoreArgs;
use crate::config::Config;
use crate::error::{BroomError, Result};
use console::style;
use globset::GlobBuilder;
use std::path::Path;

/// Append a glob pattern to the persisted ignore list.
///
/// Adding an already-present pattern is a no-op with a notice rather than a
/// duplicate entry.
pub fn cmd_ignore(repo_root: &Path, args: &IgnoreArgs) -> Result<()> {
    let pattern = args.pattern.trim();
    if pattern.is_empty() {
        return Err(BroomError::UserError(
            "ignore pattern must not be empty".to_string(),
        ));
    }

    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| BroomError::UserError(format!("invalid glob pattern '{}': {}", pattern, e)))?;

    let mut config = Config::load_from(repo_root)?;
    if config.ignore_branches.iter().any(|p| p == pattern) {
        println!("Pattern '{}' is already in the ignore list.", pattern);
        return Ok(());
    }

    config.ignore_branches.push(pattern.to_string());
    config.save_to(repo_root)?;

    println!(
        "{} Added '{}' to the ignore list",
        style("✓").green(),
        pattern
    );
    Ok(())
}

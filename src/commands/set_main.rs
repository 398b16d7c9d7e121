//! Implementation of the `broom set-main` command.

use crate::cli::SetMainArgs;
use crate::config::Config;
use crate::error::{BroomError, Result};
use crate::git_branch::{branch_exists, fetch_branch};
use console::style;
use std::path::Path;

/// Persist the preferred main branch for this repository.
///
/// The branch must exist locally, or be fetchable from origin; otherwise the
/// choice would make every future cleanup run fail at discovery.
pub fn cmd_set_main(repo_root: &Path, args: &SetMainArgs) -> Result<()> {
    let branch = args.branch.trim();
    if branch.is_empty() {
        return Err(BroomError::UserError(
            "branch name must not be empty".to_string(),
        ));
    }

    if !branch_exists(repo_root, branch)? {
        fetch_branch(repo_root, branch).map_err(|_| {
            BroomError::UserError(format!(
                "branch '{}' does not exist locally or on the remote",
                branch
            ))
        })?;
    }

    let mut config = Config::load_from(repo_root)?;
    config.main_branch = Some(branch.to_string());
    config.save_to(repo_root)?;

    println!(
        "{} Set main branch to '{}'",
        style("✓").green(),
        branch
    );
    Ok(())
}

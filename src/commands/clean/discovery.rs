//! Discovery phase: main-branch resolution and repository synchronization.

use super::types::SessionState;
use crate::config::Config;
use crate::error::Result;
use crate::git_branch::{
    MainBranchSource, checkout, current_branch, fetch_branch, fetch_prune, pull,
    resolve_main_branch,
};
use std::path::Path;

/// Bring the repository up to date and capture the session state.
///
/// Resolves the main branch, fetches its remote update, moves the checkout
/// onto it when it is elsewhere, and prunes stale tracking refs so gone
/// markers are current before classification.
pub fn discover(repo_root: &Path, config: &Config) -> Result<SessionState> {
    let (main_branch, source) = resolve_main_branch(repo_root, config.main_branch.as_deref())?;
    if source == MainBranchSource::Fallback {
        eprintln!(
            "warning: could not detect the main branch; assuming 'main'. \
             Set it explicitly with: broom set-main <branch>"
        );
    }

    let original_branch = current_branch(repo_root)?;

    fetch_branch(repo_root, &main_branch)?;

    if original_branch != main_branch {
        println!("Switching to branch '{}'...", main_branch);
        checkout(repo_root, &main_branch)?;
        println!("Pulling latest changes...");
        pull(repo_root)?;
    }

    println!("Pruning deleted remote branches...");
    fetch_prune(repo_root)?;

    Ok(SessionState {
        main_branch,
        original_branch,
        candidates: Vec::new(),
    })
}

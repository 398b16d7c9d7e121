//! Worktree guard: branches checked out in any linked working copy.

use crate::git::run_git;
use std::collections::BTreeSet;
use std::path::Path;

/// Branches currently checked out across all worktrees of the repository.
///
/// Deleting one of these would yank the branch out from under a live
/// checkout, so the classifier excludes them. If the query fails (old git,
/// worktrees unsupported) the guard degrades to an empty set: it is an
/// advisory layer under the merge-status and remote-gone checks, and
/// refusing to clean anything would be the worse trade.
pub fn checked_out_branches<P: AsRef<Path>>(repo_root: P) -> BTreeSet<String> {
    match run_git(repo_root, &["worktree", "list", "--porcelain"]) {
        Ok(output) => parse_worktree_branches(&output.stdout),
        Err(_) => BTreeSet::new(),
    }
}

/// Extract branch names from `git worktree list --porcelain` output.
///
/// Each worktree stanza carries a `branch refs/heads/<name>` line; detached
/// worktrees have a `detached` line instead and contribute nothing.
fn parse_worktree_branches(stdout: &str) -> BTreeSet<String> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("branch "))
        .filter_map(|branch_ref| branch_ref.strip_prefix("refs/heads/"))
        .map(String::from)
        .collect()
}

//! Merge-status detection.
//!
//! Decides whether a branch's work is already incorporated into a target
//! branch. Different integration workflows leave different traces, so the
//! check runs two tiers and short-circuits on the first proof:
//!
//! 1. Ancestry: the branch tip is reachable from the target's history. This
//!    covers fast-forward and true merge commits.
//! 2. Patch equivalence: `git cherry` classifies every commit unique to the
//!    branch by patch-id against the target. If none remain, or every one
//!    has an equivalent already in the target, the branch was squash- or
//!    rebase-merged even though no commit hash survived.
//!
//! Both tiers must stay; dropping the second would leave squash/rebase
//! workflows permanently "unmerged".

use crate::git::run_git;
use std::path::Path;

/// Returns true if `branch`'s commits are already incorporated into `target`.
///
/// Any query failure (branch deleted mid-check, detached state, git error)
/// yields `false`: without proof of integration the branch is kept.
pub fn is_merged<P: AsRef<Path>>(repo_root: P, branch: &str, target: &str) -> bool {
    let repo_root = repo_root.as_ref();

    // Tier 1: ancestry. Exit code 0 means the tip is reachable from target.
    if run_git(repo_root, &["merge-base", "--is-ancestor", branch, target]).is_ok() {
        return true;
    }

    // Tier 2: patch equivalence. `git cherry <target> <branch>` prints one
    // line per commit unique to the branch: "+ <sha>" when its patch is
    // absent from target, "- <sha>" when an equivalent patch is present.
    match run_git(repo_root, &["cherry", target, branch]) {
        Ok(output) => output.lines().iter().all(|line| line.starts_with('-')),
        Err(_) => false,
    }
}

//! Local branch listing with remote-tracking state, and commit-age queries.

use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

/// A local branch as reported by `git branch -vv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    /// Branch name.
    pub name: String,
    /// True if this branch is checked out in the current working copy.
    pub is_current: bool,
    /// True if the branch tracks an upstream ref that no longer exists.
    pub upstream_gone: bool,
}

/// List local branches with their tracking state.
///
/// Uses `git branch -vv` because that is the only listing that exposes the
/// "gone" upstream annotation alongside every branch in one call.
pub fn list_local_branches<P: AsRef<Path>>(repo_root: P) -> Result<Vec<LocalBranch>> {
    let output = run_git(repo_root, &["branch", "-vv", "--no-color"])?;
    Ok(parse_branch_listing(&output.stdout))
}

/// Parse `git branch -vv` output into branch records.
///
/// Long branch names can push the tracking annotation far to the right and,
/// in some terminals, across a wrapped line; all whitespace is collapsed
/// before looking for the `: gone]` marker so the match never depends on
/// column alignment.
fn parse_branch_listing(stdout: &str) -> Vec<LocalBranch> {
    let mut branches = Vec::new();

    for line in stdout.lines() {
        let is_current = line.starts_with('*');
        let body = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("+ "))
            .unwrap_or(line)
            .trim_start();

        // A detached HEAD renders as "(HEAD detached at <sha>)".
        if body.is_empty() || body.starts_with('(') {
            continue;
        }

        let name = match body.split_whitespace().next() {
            Some(n) => n.to_string(),
            None => continue,
        };

        let normalized = body.split_whitespace().collect::<Vec<_>>().join(" ");
        let upstream_gone = normalized.contains(": gone]");

        branches.push(LocalBranch {
            name,
            is_current,
            upstream_gone,
        });
    }

    branches
}

/// Age of a branch's last commit in whole days, ceiling-rounded.
///
/// A commit made any time within the last 24 hours counts as 1 day old.
pub fn branch_age_days<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<i64> {
    let output = run_git(repo_root, &["log", "-1", "--format=%ct", branch, "--"])?;
    let timestamp: i64 = output.stdout.parse().map_err(|e| {
        crate::error::BroomError::GitError(format!(
            "unexpected commit timestamp for '{}': {}",
            branch, e
        ))
    })?;

    let elapsed = (chrono::Utc::now().timestamp() - timestamp).max(0);
    // `i64::div_ceil` is unstable; `elapsed` is non-negative so this is equivalent.
    Ok((elapsed + 86_399) / 86_400)
}

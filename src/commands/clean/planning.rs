//! Classification phase: turn the branch listing into deletion candidates.

use super::types::{BranchCandidate, CleanupMode, CleanupReason, SessionState};
use crate::config::Config;
use crate::error::{BroomError, Result};
use crate::git_branch::{branch_age_days, checked_out_branches, is_merged, list_local_branches};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Produce the candidate set for this run.
///
/// Gone mode keeps branches whose upstream vanished; the remote deletion is
/// itself the evidence that their work was integrated, so `is_merged` is
/// true without consulting the merge check. Stale mode keeps branches older
/// than the threshold, but only when it proves their work is in the main
/// branch — staleness alone never justifies deleting unintegrated commits.
///
/// Both modes then drop ignored names and branches checked out in any
/// worktree. Output order is the listing's order, so repeated runs over the
/// same repository state propose the same sequence.
pub fn classify(
    repo_root: &Path,
    mode: CleanupMode,
    config: &Config,
    state: &SessionState,
) -> Result<Vec<BranchCandidate>> {
    let branches = list_local_branches(repo_root)?;
    let ignored = build_ignore_set(&config.ignore_branches)?;
    let protected = checked_out_branches(repo_root);

    let mut candidates = Vec::new();
    for branch in branches {
        if branch.name == state.main_branch {
            continue;
        }

        let candidate = match mode {
            CleanupMode::Gone => {
                if !branch.upstream_gone {
                    continue;
                }
                BranchCandidate {
                    name: branch.name,
                    reason: CleanupReason::RemoteGone,
                    is_merged: true,
                }
            }
            CleanupMode::Stale(threshold_days) => {
                let age = branch_age_days(repo_root, &branch.name)?;
                if age <= threshold_days {
                    continue;
                }
                if !is_merged(repo_root, &branch.name, &state.main_branch) {
                    continue;
                }
                BranchCandidate {
                    name: branch.name,
                    reason: CleanupReason::Stale(age),
                    is_merged: true,
                }
            }
        };

        if ignored.is_match(&candidate.name) {
            continue;
        }
        if protected.contains(&candidate.name) {
            continue;
        }

        candidates.push(candidate);
    }

    Ok(candidates)
}

/// Compile the ignore patterns into one matcher.
///
/// `literal_separator` keeps `*` within a path segment, so `feature/*` does
/// not swallow `feature/a/b`; `**` is available when that is wanted.
fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                BroomError::ConfigError(format!(
                    "ignoreBranches contains an invalid glob '{}': {}",
                    pattern, e
                ))
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| BroomError::ConfigError(format!("failed to compile ignore patterns: {}", e)))
}

//! Execution phase: vacate the active branch, then delete sequentially.

use super::types::{BranchCandidate, DeletionOutcome, SessionState};
use crate::error::{BroomError, Result};
use crate::git_branch::{checkout, current_branch, delete_branch, pull};
use std::path::Path;

/// Make sure the checkout is not sitting on a branch about to be deleted.
///
/// Discovery normally leaves the checkout on the main branch already; this
/// re-verifies right before the destructive step, because deleting the
/// checked-out branch is never attempted. Any failure here aborts the whole
/// run with zero deletions performed.
pub fn vacate_active_branch(repo_root: &Path, state: &SessionState) -> Result<()> {
    let doomed: Vec<&str> = state.candidates.iter().map(|c| c.name.as_str()).collect();
    if !doomed.contains(&state.original_branch.as_str()) {
        return Ok(());
    }

    let live = current_branch(repo_root)
        .map_err(|e| BroomError::SafetyViolation(state.original_branch.clone(), e.to_string()))?;

    if doomed.contains(&live.as_str()) {
        println!(
            "Moving the checkout from '{}' to '{}' before deleting...",
            live, state.main_branch
        );
        checkout(repo_root, &state.main_branch)
            .map_err(|e| BroomError::SafetyViolation(live.clone(), e.to_string()))?;
        pull(repo_root).map_err(|e| BroomError::SafetyViolation(live.clone(), e.to_string()))?;
    }

    Ok(())
}

/// Delete every candidate, one at a time, in order.
///
/// A failed deletion is recorded and the loop moves on: branch N failing
/// must not strand branches N+1 and beyond, and the survivors stay
/// retryable on the next run.
pub fn delete_candidates(repo_root: &Path, candidates: &[BranchCandidate]) -> DeletionOutcome {
    let mut outcome = DeletionOutcome::default();

    for candidate in candidates {
        match delete_branch(repo_root, &candidate.name) {
            Ok(()) => {
                println!("Deleted branch: {}", candidate.name);
                outcome.deleted.push(candidate.name.clone());
            }
            Err(e) => {
                outcome.failed.push((candidate.name.clone(), e.to_string()));
            }
        }
    }

    outcome
}

//! Terminal output for the cleanup run.

use super::types::{BranchCandidate, CleanupReason, DeletionOutcome};
use console::style;

/// One-line description of a candidate, as shown in lists and checklists.
pub fn describe(candidate: &BranchCandidate) -> String {
    match candidate.reason {
        CleanupReason::RemoteGone => format!("{} (remote deleted)", candidate.name),
        CleanupReason::Stale(days) => {
            format!("{} (inactive for {} days, merged)", candidate.name, days)
        }
    }
}

/// The dry-run report: what a real run would delete.
pub fn print_dry_run(candidates: &[BranchCandidate]) {
    println!("Dry run; the following branches would be deleted:");
    for candidate in candidates {
        println!("  {}", describe(candidate));
    }
}

/// Announce the deletion set before execution starts.
pub fn print_deletion_plan(candidates: &[BranchCandidate]) {
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    println!("The following branches will be deleted: {}", names.join(", "));
}

/// Final summary. Per-branch failures go to stderr but the batch as a whole
/// already ran to completion.
pub fn print_summary(outcome: &DeletionOutcome) {
    if !outcome.failed.is_empty() {
        eprintln!();
        eprintln!("Some branches could not be deleted:");
        for (branch, cause) in &outcome.failed {
            eprintln!("  {}: {}", branch, cause);
        }
    }

    println!(
        "{} Branch cleanup completed ({} deleted)",
        style("✓").green(),
        outcome.deleted.len()
    );
}

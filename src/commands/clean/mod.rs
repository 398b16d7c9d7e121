//! Implementation of the default cleanup action.
//!
//! A run moves through fixed phases, each feeding the next:
//!
//! 1. Discovery: resolve the main branch, synchronize it, prune tracking
//!    refs (`discovery`).
//! 2. Classification: build the candidate set for the requested mode
//!    (`planning`).
//! 3. Interaction: optionally narrow the set to the user's selection.
//! 4. Dry-run gate: report and stop before anything destructive. Checked
//!    after interaction so a dry run previews exactly what was selected.
//! 5. Protection: move the checkout off any branch in the final set
//!    (`execution::vacate_active_branch`); failure aborts with zero
//!    deletions.
//! 6. Execution: forced deletes, strictly one branch at a time, collecting
//!    per-branch failures instead of aborting (`execution`).
//!
//! Only phases 5 and 6 mutate anything beyond the discovery sync. Every git
//! call is awaited to completion before the next; the repository's on-disk
//! metadata is shared mutable state and nothing here touches it from two
//! places at once.

mod discovery;
mod display;
mod execution;
mod planning;
mod types;

#[cfg(test)]
mod tests;

use crate::cli::CleanArgs;
use crate::config::Config;
use crate::error::{BroomError, Result};
use crate::interact::{BranchSelector, TerminalSelector};
use std::path::Path;
use types::{CleanupMode, SessionState};

/// Threshold used when neither the flag nor the config carries a value.
const DEFAULT_STALE_DAYS: u32 = 90;

/// Execute the default cleanup action.
pub fn cmd_clean(repo_root: &Path, args: &CleanArgs) -> Result<()> {
    run_clean(repo_root, args, &TerminalSelector::new())
}

/// The full cleanup pipeline, with the interactive prompt abstracted so
/// tests can drive it with a scripted selector.
pub(crate) fn run_clean(
    repo_root: &Path,
    args: &CleanArgs,
    selector: &dyn BranchSelector,
) -> Result<()> {
    let config = Config::load_from(repo_root)?;
    let mode = cleanup_mode(args, &config);

    let mut state: SessionState = discovery::discover(repo_root, &config)?;
    state.candidates = planning::classify(repo_root, mode, &config, &state)?;

    if state.candidates.is_empty() {
        println!("No branches need to be cleaned up.");
        return Ok(());
    }

    if args.interactive {
        let items: Vec<String> = state.candidates.iter().map(display::describe).collect();
        let Some(mut picked) = selector.select("Select branches to delete", &items)? else {
            return Err(BroomError::Cancelled);
        };
        picked.sort_unstable();
        let selected = picked
            .into_iter()
            .map(|i| state.candidates[i].clone())
            .collect();
        state.candidates = selected;

        if state.candidates.is_empty() {
            println!("No branches selected; nothing to delete.");
            return Ok(());
        }
    }

    if args.dry_run {
        display::print_dry_run(&state.candidates);
        return Ok(());
    }

    display::print_deletion_plan(&state.candidates);
    execution::vacate_active_branch(repo_root, &state)?;
    let outcome = execution::delete_candidates(repo_root, &state.candidates);
    display::print_summary(&outcome);

    Ok(())
}

/// Pick the scan mode. An explicit `--stale <DAYS>` wins over the persisted
/// `staleDays`, which wins over the built-in default.
fn cleanup_mode(args: &CleanArgs, config: &Config) -> CleanupMode {
    match args.stale {
        None => CleanupMode::Gone,
        Some(explicit) => {
            let days = explicit.or(config.stale_days).unwrap_or(DEFAULT_STALE_DAYS);
            CleanupMode::Stale(i64::from(days))
        }
    }
}

//! Branch mutations and main-branch resolution.

use crate::error::{BroomError, Result};
use crate::git::run_git;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Matches the head line of `git ls-remote --symref origin HEAD`,
/// e.g. `ref: refs/heads/main\tHEAD`.
static SYMREF_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ref: refs/heads/(\S+)\s+HEAD").expect("invalid symref regex"));

/// Where the main branch name came from.
///
/// Surfaced so the caller can warn when the name was guessed rather than
/// configured or detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainBranchSource {
    /// `mainBranch` from the persisted config document.
    ConfigFile,
    /// `broom.mainBranch` from git config.
    GitConfig,
    /// The remote's symbolic HEAD.
    RemoteHead,
    /// A local branch named `main` or `master` exists.
    LocalConvention,
    /// No signal at all; the literal `"main"` was assumed.
    Fallback,
}

/// Name of the branch currently checked out.
pub fn current_branch<P: AsRef<Path>>(repo_root: P) -> Result<String> {
    let output = run_git(repo_root, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(output.stdout)
}

/// Check if a branch exists locally.
pub fn branch_exists<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<bool> {
    let output = run_git(
        repo_root,
        &["rev-parse", "--verify", &format!("refs/heads/{}", branch)],
    );
    Ok(output.is_ok())
}

/// Switch the working copy to a branch.
pub fn checkout<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<()> {
    run_git(repo_root, &["checkout", branch]).map_err(|e| {
        BroomError::GitError(format!("failed to check out '{}': {}", branch, e))
    })?;
    Ok(())
}

/// Pull the current branch from its upstream.
pub fn pull<P: AsRef<Path>>(repo_root: P) -> Result<()> {
    run_git(repo_root, &["pull"])
        .map_err(|e| BroomError::GitError(format!("failed to pull: {}", e)))?;
    Ok(())
}

/// Fetch a single branch from origin.
pub fn fetch_branch<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<()> {
    run_git(repo_root, &["fetch", "origin", branch]).map_err(|e| {
        BroomError::GitError(format!("failed to fetch origin/{}: {}", branch, e))
    })?;
    Ok(())
}

/// Fetch all remote branches and prune tracking refs whose upstream vanished.
///
/// Pruning is what turns a remotely deleted branch into a local gone marker,
/// so this must run before the branch listing is classified.
pub fn fetch_prune<P: AsRef<Path>>(repo_root: P) -> Result<()> {
    run_git(repo_root, &["fetch", "--prune"])
        .map_err(|e| BroomError::GitError(format!("failed to fetch --prune: {}", e)))?;
    Ok(())
}

/// Delete a local branch with `-D`.
///
/// Always forced: by the time a deletion runs, merge status was either
/// proven by the merge check, implied by the remote deletion, or explicitly
/// overridden by the user's selection, and git's own "not fully merged"
/// guard does not understand squash merges.
pub fn delete_branch<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<()> {
    run_git(repo_root, &["branch", "-D", branch]).map_err(|e| {
        BroomError::GitError(format!("failed to delete branch '{}': {}", branch, e))
    })?;
    Ok(())
}

/// Resolve the name of the main branch.
///
/// Priority: persisted config, `broom.mainBranch` git config, the remote's
/// symbolic HEAD, a local `main`/`master`, and finally the literal `"main"`.
/// Remote errors during detection are ignored; the chain just moves on.
pub fn resolve_main_branch<P: AsRef<Path>>(
    repo_root: P,
    configured: Option<&str>,
) -> Result<(String, MainBranchSource)> {
    let repo_root = repo_root.as_ref();

    if let Some(name) = configured {
        return Ok((name.to_string(), MainBranchSource::ConfigFile));
    }

    if let Ok(output) = run_git(repo_root, &["config", "--get", "broom.mainBranch"]) {
        if !output.is_empty() {
            return Ok((output.stdout, MainBranchSource::GitConfig));
        }
    }

    if let Ok(output) = run_git(repo_root, &["ls-remote", "--symref", "origin", "HEAD"]) {
        if let Some(captures) = SYMREF_HEAD.captures(&output.stdout) {
            return Ok((captures[1].to_string(), MainBranchSource::RemoteHead));
        }
    }

    for candidate in ["main", "master"] {
        if branch_exists(repo_root, candidate)? {
            return Ok((candidate.to_string(), MainBranchSource::LocalConvention));
        }
    }

    Ok(("main".to_string(), MainBranchSource::Fallback))
}

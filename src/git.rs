//! Git command runner for broom.
//!
//! Thin wrapper around the `git` binary with captured stdout/stderr and
//! structured errors. Every repository query and mutation in the crate goes
//! through [`run_git`], one subprocess at a time; nothing here spawns
//! concurrently because the repository's refs and HEAD are shared mutable
//! state on disk.

use crate::error::{BroomError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured output of a successful git command.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, trimmed.
    pub stdout: String,
    /// Standard error, trimmed.
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command in the given directory.
///
/// Returns `Ok(GitOutput)` on exit code 0 and `Err(BroomError::GitError)`
/// otherwise, with the command's stderr folded into the message.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            BroomError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(BroomError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Resolve the repository root via `git rev-parse --show-toplevel`.
///
/// "Not inside a repository" is a user error (exit 1), not a git failure.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            BroomError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    if output.status.success() {
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(PathBuf::from(root))
    } else {
        Err(BroomError::UserError(
            "not inside a git repository. Run broom from within a git repository.".to_string(),
        ))
    }
}

/// Verify the repository is usable for a cleanup run.
///
/// Checks, in order: the directory is inside a repository, at least one
/// remote is configured, and the remote answers a dry-run fetch. Each
/// failure is fatal and reported before any phase starts, so a run never
/// begins against a repository it cannot finish in.
///
/// Returns the repository root on success.
pub fn ensure_repository<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let root = get_repo_root(cwd)?;

    let remotes = run_git(&root, &["remote"])?;
    if remotes.is_empty() {
        return Err(BroomError::UserError(
            "this repository has no remote configured. Add one with: git remote add origin <url>"
                .to_string(),
        ));
    }

    run_git(&root, &["fetch", "--dry-run"]).map_err(|e| {
        BroomError::UserError(format!(
            "cannot reach the remote repository: {}\n\n\
             Check your network connection and repository permissions.",
            e
        ))
    })?;

    Ok(root)
}

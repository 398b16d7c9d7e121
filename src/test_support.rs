use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not
        // thread-safe. Lock it so tests don't race even if a #[serial]
        // annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A standalone repository on `main` with one commit and no remote.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

/// A bare "remote" repository plus a clone of it on `main`.
///
/// The clone has `origin` configured and `main` tracking `origin/main`, so
/// tests can push branches, delete them upstream, and observe gone markers.
pub(crate) fn create_cloned_repo() -> (TempDir, TempDir) {
    let remote_dir = TempDir::new().unwrap();
    git(remote_dir.path(), &["init", "--bare"]);
    git(remote_dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);

    let seed_dir = TempDir::new().unwrap();
    init_repo(seed_dir.path());
    let remote_url = remote_dir.path().to_string_lossy().to_string();
    git(seed_dir.path(), &["remote", "add", "origin", &remote_url]);
    git(seed_dir.path(), &["push", "-u", "origin", "main"]);

    (remote_dir, seed_dir)
}

/// Create a branch in `repo`, push it to origin, then delete it upstream and
/// prune, leaving the local branch with a gone tracking annotation.
pub(crate) fn create_gone_branch(repo: &Path, branch: &str) {
    git(repo, &["checkout", "-b", branch]);
    std::fs::write(repo.join(format!("{}.txt", branch.replace('/', "-"))), "x\n").unwrap();
    git(repo, &["add", "."]);
    git(repo, &["commit", "-m", &format!("work on {}", branch)]);
    git(repo, &["push", "-u", "origin", branch]);
    git(repo, &["checkout", "main"]);
    git(repo, &["push", "origin", "--delete", branch]);
    git(repo, &["fetch", "--prune"]);
}

/// Create a branch with a single commit whose committer date lies `days_ago`
/// in the past, then return to `main`.
pub(crate) fn create_backdated_branch(repo: &Path, branch: &str, days_ago: i64) {
    git(repo, &["checkout", "-b", branch]);
    std::fs::write(repo.join(format!("{}.txt", branch.replace('/', "-"))), "y\n").unwrap();
    git(repo, &["add", "."]);

    let ts = chrono::Utc::now().timestamp() - days_ago * 86_400;
    let date = format!("{} +0000", ts);
    git_with_env(
        repo,
        &["commit", "-m", &format!("old work on {}", branch)],
        &[("GIT_AUTHOR_DATE", &date), ("GIT_COMMITTER_DATE", &date)],
    );
    git(repo, &["checkout", "main"]);
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic default branch name across environments: point HEAD at an
    // unborn `main` before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    git_with_env(repo_dir, args, &[]);
}

fn git_with_env(repo_dir: &Path, args: &[&str], env: &[(&str, &str)]) {
    let mut cmd = Command::new("git");
    cmd.current_dir(repo_dir).args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

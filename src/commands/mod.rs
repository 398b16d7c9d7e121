//! Command implementations for broom.
//!
//! The dispatcher verifies the repository is usable (inside a repo, remote
//! configured and reachable) once, before any command runs, then routes to
//! the handler.

mod clean;
mod ignore;
mod set_main;

use crate::cli::{Cli, Command};
use crate::error::{BroomError, Result};
use crate::git;

/// Dispatch a parsed invocation to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| BroomError::UserError(format!("cannot determine working directory: {}", e)))?;
    let repo_root = git::ensure_repository(&cwd)?;

    match cli.command {
        None => clean::cmd_clean(&repo_root, &cli.clean),
        Some(Command::SetMain(args)) => set_main::cmd_set_main(&repo_root, &args),
        Some(Command::Ignore(args)) => ignore::cmd_ignore(&repo_root, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CleanArgs;
    use crate::exit_codes;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn dispatch_outside_a_repository_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let cli = Cli {
            command: None,
            clean: CleanArgs::default(),
        };
        let err = dispatch(cli).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("not inside a git repository"));
    }
}

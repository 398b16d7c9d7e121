use super::types::CleanupMode;
use super::{cleanup_mode, run_clean};
use crate::cli::CleanArgs;
use crate::config::Config;
use crate::error::BroomError;
use crate::git_branch::{branch_exists, current_branch};
use crate::interact::stub::StubSelector;
use crate::test_support::{
    create_backdated_branch, create_cloned_repo, create_gone_branch, git,
};
use std::path::Path;

fn gone_args() -> CleanArgs {
    CleanArgs::default()
}

fn stale_args(days: u32) -> CleanArgs {
    CleanArgs {
        stale: Some(Some(days)),
        ..CleanArgs::default()
    }
}

fn run_default(repo: &Path, args: &CleanArgs) -> crate::error::Result<()> {
    // Non-interactive runs must never consult the selector.
    run_clean(repo, args, &StubSelector::Picks(vec![]))
}

#[test]
fn empty_candidate_set_terminates_successfully() {
    let (_remote, local) = create_cloned_repo();
    run_default(local.path(), &gone_args()).unwrap();
    assert_eq!(current_branch(local.path()).unwrap(), "main");
}

#[test]
fn gone_branches_are_deleted() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");
    create_gone_branch(local.path(), "feature/b");

    run_default(local.path(), &gone_args()).unwrap();

    assert!(!branch_exists(local.path(), "feature/a").unwrap());
    assert!(!branch_exists(local.path(), "feature/b").unwrap());
    assert!(branch_exists(local.path(), "main").unwrap());
}

#[test]
fn dry_run_deletes_nothing() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");

    let args = CleanArgs {
        dry_run: true,
        ..CleanArgs::default()
    };
    run_default(local.path(), &args).unwrap();

    assert!(branch_exists(local.path(), "feature/a").unwrap());
}

#[test]
fn ignored_branches_survive_a_real_run() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");
    create_gone_branch(local.path(), "feature/b");

    let config = Config {
        ignore_branches: vec!["feature/b".to_string()],
        ..Config::default()
    };
    config.save_to(local.path()).unwrap();

    run_default(local.path(), &gone_args()).unwrap();

    assert!(!branch_exists(local.path(), "feature/a").unwrap());
    assert!(branch_exists(local.path(), "feature/b").unwrap());
}

#[test]
fn invalid_persisted_config_aborts_before_discovery() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");
    std::fs::write(local.path().join(".broom"), r#"{"staleDays": 0}"#).unwrap();

    let err = run_default(local.path(), &gone_args()).unwrap_err();
    assert!(matches!(err, BroomError::ConfigError(_)));
    assert!(branch_exists(local.path(), "feature/a").unwrap());
}

#[test]
fn run_started_on_a_doomed_branch_vacates_then_deletes() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/dead");
    git(local.path(), &["checkout", "feature/dead"]);

    run_default(local.path(), &gone_args()).unwrap();

    assert_eq!(current_branch(local.path()).unwrap(), "main");
    assert!(!branch_exists(local.path(), "feature/dead").unwrap());
}

#[test]
fn dry_run_from_a_doomed_branch_stops_after_discovery() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/dead");
    git(local.path(), &["checkout", "feature/dead"]);

    let args = CleanArgs {
        dry_run: true,
        ..CleanArgs::default()
    };
    run_default(local.path(), &args).unwrap();

    // Discovery moved the checkout to main, but nothing was deleted.
    assert_eq!(current_branch(local.path()).unwrap(), "main");
    assert!(branch_exists(local.path(), "feature/dead").unwrap());
}

#[test]
fn interactive_selection_narrows_the_deletion_set() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");
    create_gone_branch(local.path(), "feature/b");

    // Candidates list alphabetically: feature/a, feature/b. Keep only the
    // second.
    let selector = StubSelector::Picks(vec![1]);
    run_clean(local.path(), &CleanArgs {
        interactive: true,
        ..CleanArgs::default()
    }, &selector)
    .unwrap();

    assert!(branch_exists(local.path(), "feature/a").unwrap());
    assert!(!branch_exists(local.path(), "feature/b").unwrap());
}

#[test]
fn interactive_cancel_aborts_without_deleting() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");

    let err = run_clean(local.path(), &CleanArgs {
        interactive: true,
        ..CleanArgs::default()
    }, &StubSelector::Cancels)
    .unwrap_err();

    assert!(matches!(err, BroomError::Cancelled));
    assert_eq!(err.exit_code(), 0);
    assert!(branch_exists(local.path(), "feature/a").unwrap());
}

#[test]
fn interactive_empty_selection_deletes_nothing() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");

    run_clean(local.path(), &CleanArgs {
        interactive: true,
        ..CleanArgs::default()
    }, &StubSelector::Picks(vec![]))
    .unwrap();

    assert!(branch_exists(local.path(), "feature/a").unwrap());
}

#[test]
fn interactive_dry_run_previews_the_selection_only() {
    let (_remote, local) = create_cloned_repo();
    create_gone_branch(local.path(), "feature/a");
    create_gone_branch(local.path(), "feature/b");

    let args = CleanArgs {
        interactive: true,
        dry_run: true,
        ..CleanArgs::default()
    };
    run_clean(local.path(), &args, &StubSelector::Picks(vec![0])).unwrap();

    // Dry run comes after selection, and still deletes nothing.
    assert!(branch_exists(local.path(), "feature/a").unwrap());
    assert!(branch_exists(local.path(), "feature/b").unwrap());
}

#[test]
fn stale_run_deletes_merged_branches_and_keeps_unmerged_ones() {
    let (_remote, local) = create_cloned_repo();
    let path = local.path();

    create_backdated_branch(path, "old/x", 45);
    git(path, &["merge", "--no-ff", "old/x"]);
    create_backdated_branch(path, "old/y", 45);

    run_default(path, &stale_args(30)).unwrap();

    assert!(!branch_exists(path, "old/x").unwrap());
    assert!(branch_exists(path, "old/y").unwrap());
}

#[test]
fn stale_run_keeps_branches_younger_than_the_threshold() {
    let (_remote, local) = create_cloned_repo();
    let path = local.path();

    create_backdated_branch(path, "old/x", 45);
    git(path, &["merge", "--no-ff", "old/x"]);

    run_default(path, &stale_args(60)).unwrap();
    assert!(branch_exists(path, "old/x").unwrap());
}

#[test]
fn mode_resolution_prefers_explicit_days() {
    let config = Config {
        stale_days: Some(30),
        ..Config::default()
    };
    assert_eq!(cleanup_mode(&stale_args(7), &config), CleanupMode::Stale(7));
}

#[test]
fn mode_resolution_falls_back_to_config_then_default() {
    let bare_stale = CleanArgs {
        stale: Some(None),
        ..CleanArgs::default()
    };

    let config = Config {
        stale_days: Some(30),
        ..Config::default()
    };
    assert_eq!(cleanup_mode(&bare_stale, &config), CleanupMode::Stale(30));
    assert_eq!(
        cleanup_mode(&bare_stale, &Config::default()),
        CleanupMode::Stale(90)
    );
    assert_eq!(cleanup_mode(&CleanArgs::default(), &config), CleanupMode::Gone);
}

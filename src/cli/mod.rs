//! CLI argument parsing for broom.
//!
//! Uses clap derive macros. The default action (no subcommand) is the
//! cleanup run itself; `set-main` and `ignore` manage the persisted config.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  broom                    Clean up branches whose remote is gone
  broom -i                 Pick the branches to delete from a checklist
  broom -d                 Preview the deletions without deleting
  broom --stale            Find branches inactive for 90+ days
  broom --stale 30         Find branches inactive for 30+ days
  broom ignore 'temp/*'    Never touch branches matching temp/*
  broom set-main master    Use 'master' as the main branch
";

/// Broom: tidy up local git branches.
///
/// Without a subcommand, broom finds local branches whose remote
/// counterpart was deleted (or, with --stale, branches that have gone
/// quiet) and removes them under safety rules: the main branch and
/// branches checked out in any worktree are never touched, and stale
/// branches are only deleted once their work is proven merged.
#[derive(Parser, Debug)]
#[command(name = "broom")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub clean: CleanArgs,
}

/// Subcommands for managing the persisted configuration.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the main branch for this repository.
    ///
    /// The branch must exist locally or be fetchable from origin. The
    /// choice is persisted in the .broom file at the repository root.
    SetMain(SetMainArgs),

    /// Add a branch pattern to the ignore list.
    ///
    /// Branches matching an ignored glob (e.g. "release/*") are never
    /// proposed for deletion.
    Ignore(IgnoreArgs),
}

/// Flags for the default cleanup action.
#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Pick the branches to delete from a checklist.
    #[arg(short, long)]
    pub interactive: bool,

    /// Show what would be deleted without deleting anything.
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Target stale branches instead of gone ones; DAYS overrides the
    /// configured age threshold (default 90).
    #[arg(long, value_name = "DAYS", num_args = 0..=1,
          value_parser = clap::value_parser!(u32).range(1..=365))]
    pub stale: Option<Option<u32>>,
}

/// Arguments for the `set-main` command.
#[derive(Args, Debug)]
pub struct SetMainArgs {
    /// Branch to use as the main branch.
    pub branch: String,
}

/// Arguments for the `ignore` command.
#[derive(Args, Debug)]
pub struct IgnoreArgs {
    /// Glob pattern to add to the ignore list (e.g. "release/*").
    pub pattern: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

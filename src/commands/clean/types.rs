//! Data types for the cleanup run.

/// What the classifier scans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupMode {
    /// Branches whose upstream ref no longer exists.
    Gone,
    /// Branches whose last commit is older than this many days.
    Stale(i64),
}

/// Why a branch was proposed for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupReason {
    /// The remote counterpart was deleted; the integration already happened
    /// upstream (e.g. squash-and-close on a pull request).
    RemoteGone,
    /// No commits for this many days.
    Stale(i64),
}

/// A branch proposed for deletion. Immutable once produced by the
/// classifier; the interaction phase only narrows the set, never edits it.
#[derive(Debug, Clone)]
pub struct BranchCandidate {
    /// Branch name.
    pub name: String,
    /// Why the branch qualified.
    pub reason: CleanupReason,
    /// Whether the branch's work is proven to be in the main branch.
    /// Remote-gone candidates carry `true` by definition; stale candidates
    /// only survive classification when the merge check proved it.
    pub is_merged: bool,
}

/// State for a single cleanup run. Created at discovery, threaded through
/// the phases by reference, and dropped when the run ends; nothing here is
/// ever persisted.
#[derive(Debug)]
pub struct SessionState {
    /// Resolved name of the main branch.
    pub main_branch: String,
    /// Branch that was checked out when the run began. The execution phase
    /// refuses to delete it without vacating the checkout first.
    pub original_branch: String,
    /// Deletion candidates, in branch-listing order.
    pub candidates: Vec<BranchCandidate>,
}

/// What the execution phase actually did.
#[derive(Debug, Default)]
pub struct DeletionOutcome {
    /// Branches deleted, in execution order.
    pub deleted: Vec<String>,
    /// Branches that could not be deleted, with the cause. These do not
    /// abort the run; later candidates were still attempted.
    pub failed: Vec<(String, String)>,
}

//! Exit code constants for the broom CLI.
//!
//! - 0: Success (including user cancellation)
//! - 1: User error (bad args, repository unavailable)
//! - 2: Invalid persisted configuration
//! - 3: Git operation failure
//! - 4: Safety violation (active branch could not be vacated)

/// Successful execution. User cancellation also exits with this code.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, or the repository/remote is unavailable.
pub const USER_ERROR: i32 = 1;

/// The persisted config document is well-formed but semantically invalid.
pub const CONFIG_FAILURE: i32 = 2;

/// Git operation failure: checkout, pull, fetch, or listing errors.
pub const GIT_FAILURE: i32 = 3;

/// Safety violation: a branch about to be deleted is still checked out and
/// could not be vacated.
pub const SAFETY_FAILURE: i32 = 4;

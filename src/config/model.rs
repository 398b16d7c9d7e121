//! Config struct definition and defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the config document at the repository root.
pub const CONFIG_FILE_NAME: &str = ".broom";

/// Contents of the `.broom` document.
///
/// Every field is optional; an absent file behaves like an empty object.
/// Unknown fields land in `extra` and are written back verbatim, so saving
/// never destroys data the tool does not understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Preferred main branch for this repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_branch: Option<String>,

    /// Glob patterns for branches that must never be cleanup candidates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_branches: Vec<String>,

    /// Age threshold in days for stale-branch detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_days: Option<u32>,

    /// Unrecognized fields, preserved across writes.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

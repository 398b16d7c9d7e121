//! Config loading, validation, and persistence.
//!
//! Two failure classes are deliberately kept apart: bytes that do not parse
//! as JSON are treated as an empty config (a corrupt file should never block
//! cleanup), while a document that parses but carries invalid values is a
//! fatal error — a hand-edited but broken config must never silently steer
//! deletions.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{BroomError, Result};
use globset::GlobBuilder;
use serde_json::Value;
use std::path::Path;

impl Config {
    /// Load the config document from the repository root.
    ///
    /// A missing or unparsable file yields the default (empty) config.
    /// A parsed document that fails validation is a `ConfigError`.
    pub fn load_from<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Ok(Self::default()),
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => return Ok(Self::default()),
        };

        let Some(doc) = value.as_object() else {
            return Ok(Self::default());
        };

        validate_document(doc)?;

        let mut config: Config = serde_json::from_value(Value::Object(doc.clone()))
            .map_err(|e| BroomError::ConfigError(e.to_string()))?;

        if let Some(main) = config.main_branch.take() {
            config.main_branch = Some(main.trim().to_string());
        }

        config.validate()?;
        Ok(config)
    }

    /// Persist the config document to the repository root.
    ///
    /// Validates first; unknown fields captured at load time are written
    /// back, so load-mutate-save is a merge, not a replacement.
    pub fn save_to<P: AsRef<Path>>(&self, repo_root: P) -> Result<()> {
        self.validate()?;

        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BroomError::ConfigError(format!("failed to serialize config: {}", e)))?;

        std::fs::write(&path, format!("{}\n", json)).map_err(|e| {
            BroomError::UserError(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Validate field values. Each violation is fatal.
    pub fn validate(&self) -> Result<()> {
        if let Some(main) = &self.main_branch {
            if main.trim().is_empty() {
                return Err(BroomError::ConfigError(
                    "mainBranch must be a non-empty string".to_string(),
                ));
            }
        }

        for pattern in &self.ignore_branches {
            if pattern.is_empty() {
                return Err(BroomError::ConfigError(
                    "ignoreBranches must contain non-empty strings".to_string(),
                ));
            }
            GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| {
                    BroomError::ConfigError(format!(
                        "ignoreBranches contains an invalid glob '{}': {}",
                        pattern, e
                    ))
                })?;
        }

        if let Some(days) = self.stale_days {
            if !(1..=365).contains(&days) {
                return Err(BroomError::ConfigError(
                    "staleDays must be an integer between 1 and 365".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Type-check the recognized fields of a raw document.
///
/// Runs before deserialization so a wrong type produces the same message a
/// user would expect from the validation rules, not a serde type error.
fn validate_document(doc: &serde_json::Map<String, Value>) -> Result<()> {
    if let Some(main) = doc.get("mainBranch") {
        if !main.is_string() {
            return Err(BroomError::ConfigError(
                "mainBranch must be a non-empty string".to_string(),
            ));
        }
    }

    if let Some(ignore) = doc.get("ignoreBranches") {
        let Some(entries) = ignore.as_array() else {
            return Err(BroomError::ConfigError(
                "ignoreBranches must be an array".to_string(),
            ));
        };
        if entries.iter().any(|entry| !entry.is_string()) {
            return Err(BroomError::ConfigError(
                "ignoreBranches must contain non-empty strings".to_string(),
            ));
        }
    }

    if let Some(days) = doc.get("staleDays") {
        let in_range = matches!(days.as_i64(), Some(n) if !days.is_f64() && (1..=365).contains(&n));
        if !in_range {
            return Err(BroomError::ConfigError(
                "staleDays must be an integer between 1 and 365".to_string(),
            ));
        }
    }

    Ok(())
}

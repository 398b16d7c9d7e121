//! Interactive branch selection.
//!
//! The cleanup flow only needs one interaction: show a checklist of branch
//! descriptions and get back the chosen subset, or a cancellation. That
//! contract is a trait so the orchestrator can be driven by a stub in tests;
//! the terminal implementation uses dialoguer's MultiSelect.

use crate::error::{BroomError, Result};
use dialoguer::MultiSelect;
use dialoguer::theme::ColorfulTheme;
use std::io::IsTerminal;

/// A checklist prompt. `Ok(None)` means the user cancelled.
pub trait BranchSelector {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>>;
}

/// Terminal-backed selector. All items start checked, so confirming the
/// default selection deletes everything that was proposed.
pub struct TerminalSelector;

impl TerminalSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchSelector for TerminalSelector {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        if !std::io::stdin().is_terminal() {
            return Err(BroomError::UserError(
                "interactive mode requires a terminal. Re-run without --interactive.".to_string(),
            ));
        }

        let defaults = vec![true; items.len()];
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .defaults(&defaults)
            .interact_opt();

        match selection {
            Ok(picked) => Ok(picked),
            // Ctrl-C inside the prompt surfaces as an interrupted read.
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
                Err(BroomError::Cancelled)
            }
            Err(e) => Err(BroomError::UserError(format!("prompt failed: {}", e))),
        }
    }
}

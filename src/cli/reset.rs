//! Reset Gate: confirmed drop-and-rebuild.
//!
//! The decision is a pure function of the operator's response
//! ([`confirm_reset`]); reading that response is kept separate
//! ([`read_confirmation`]) so the gate can be driven without a terminal.
//!
//! Nothing here retries. Any failure is returned and the command exits
//! non-zero.

use attendance_core::SetupError;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};
use tracing::{info, warn};

use super::print_banner;
use super::setup::{BootstrapStage, SetupFailure, SetupReport, setup_database};
use crate::state::SetupContext;

/// The only response that lets a reset proceed (compared case-insensitively).
pub const RESET_CONFIRMATION: &str = "yes";

pub const RESET_PROMPT: &str = "Are you sure you want to reset the database? (yes/no)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The operator declined; nothing was touched.
    Cancelled,
    Completed(SetupReport),
}

/// Returns true only for `yes` in any letter case, ignoring surrounding
/// whitespace.
pub fn confirm_reset(response: &str) -> bool {
    response.trim().eq_ignore_ascii_case(RESET_CONFIRMATION)
}

pub fn print_reset_warning() {
    print_banner("WARNING: This will delete all data from the database!");
}

/// Reads one response line. Uses an interactive prompt on a terminal and a
/// plain line read otherwise, so the answer can be piped in.
pub fn read_confirmation() -> Result<String, SetupError> {
    let stdin = std::io::stdin();

    if stdin.is_terminal() {
        return Input::<String>::new()
            .with_prompt(RESET_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SetupError::Prompt(e.to_string()));
    }

    print!("\n{RESET_PROMPT}: ");
    std::io::stdout()
        .flush()
        .map_err(|e| SetupError::Prompt(e.to_string()))?;

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .map_err(|e| SetupError::Prompt(e.to_string()))?;
    Ok(line)
}

/// Drops every table, recreates the schema and re-runs setup, provided
/// `response` confirms. Any other response returns
/// [`ResetOutcome::Cancelled`] without touching the database.
pub async fn reset_database(
    ctx: &SetupContext,
    response: &str,
) -> Result<ResetOutcome, SetupFailure> {
    if !confirm_reset(response) {
        info!("Reset declined by operator");
        println!("Reset cancelled.");
        return Ok(ResetOutcome::Cancelled);
    }

    warn!("Dropping all tables and records");
    println!("\nResetting database...");

    let mut conn = ctx
        .db
        .acquire()
        .await
        .map_err(|e| SetupFailure::at(BootstrapStage::Uninitialized)(SetupError::Connection(e)))?;
    attendance_db::rebuild_schema(&mut *conn)
        .await
        .map_err(|e| SetupFailure::at(BootstrapStage::Uninitialized)(SetupError::Schema(e)))?;
    drop(conn);
    println!("✓ Database reset successfully!");

    let report = setup_database(ctx).await?;
    Ok(ResetOutcome::Completed(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_in_any_case_confirms() {
        assert!(confirm_reset("yes"));
        assert!(confirm_reset("YES"));
        assert!(confirm_reset("Yes"));
        assert!(confirm_reset("  yes\n"));
    }

    #[test]
    fn anything_else_cancels() {
        for response in ["", "no", "y", "yes please", "yess", "oui", "\n"] {
            assert!(!confirm_reset(response), "{response:?} must not confirm");
        }
    }
}

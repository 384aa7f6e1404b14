//! `passvault delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let mut session = Session::open(cli)?;
    let idx = session.index_of(number)?;

    if !force {
        let title = session.entry(number)?.title.clone();
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry #{number} '{title}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirmation prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let removed = session
        .vault
        .remove(idx)
        .ok_or(PassVaultError::EntryNotFound(number))?;
    session.save()?;

    output::success(&format!(
        "Entry '{}' deleted ({} remaining)",
        removed.title,
        session.vault.len()
    ));

    Ok(())
}

//! `passvault add` — append an entry to the vault.

use crate::cli::output;
use crate::cli::{prompt_entry_secret, Cli, Session};
use crate::errors::Result;
use crate::generator;
use crate::strength;
use crate::vault::Entry;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    title: &str,
    username: &str,
    url: &str,
    notes: &str,
    folder: &str,
    generate: bool,
) -> Result<()> {
    let mut session = Session::open(cli)?;

    let secret = if generate {
        generator::generate(&session.settings.generator_policy())?
    } else {
        prompt_entry_secret(title)?.to_string()
    };

    let estimate = strength::estimate(&secret);
    let entry = Entry::new(title, secret)?
        .with_username(username)
        .with_url(url)
        .with_notes(notes)
        .with_folder(folder);

    session.vault.add(entry);
    session.save()?;

    output::success(&format!(
        "Entry '{}' added as #{}",
        title,
        session.vault.len()
    ));
    if generate {
        output::info("Generated a new password for this entry.");
    }
    output::strength(&estimate);
    if estimate.score < 2 {
        output::warning("This password is weak. Consider `passvault edit --generate`.");
    }

    Ok(())
}

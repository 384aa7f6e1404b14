//! `passvault edit` — change fields of an existing entry.

use crate::cli::output;
use crate::cli::{prompt_entry_secret, Cli, Session};
use crate::errors::{PassVaultError, Result};
use crate::generator;
use crate::strength;

/// Field changes requested on the command line. `None` leaves a field as is.
#[derive(Debug, Default)]
pub struct EntryChanges {
    pub title: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub folder: Option<String>,
    /// Prompt for a new password.
    pub prompt_password: bool,
    /// Replace the password with a generated one.
    pub generate: bool,
}

impl EntryChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.username.is_none()
            && self.url.is_none()
            && self.notes.is_none()
            && self.folder.is_none()
            && !self.prompt_password
            && !self.generate
    }
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, number: usize, changes: EntryChanges) -> Result<()> {
    if changes.is_empty() {
        output::tip("Pass at least one of --title, --username, --url, --notes, --folder, --password, --generate.");
        return Err(PassVaultError::CommandFailed("nothing to change".into()));
    }

    let mut session = Session::open(cli)?;
    let idx = session.index_of(number)?;

    // Produce the new secret before borrowing the entry mutably.
    let new_secret = if changes.generate {
        Some(generator::generate(&session.settings.generator_policy())?)
    } else if changes.prompt_password {
        let title = session.entry(number)?.title.clone();
        Some(prompt_entry_secret(&title)?.to_string())
    } else {
        None
    };

    let entry = session
        .vault
        .get_mut(idx)
        .ok_or(PassVaultError::EntryNotFound(number))?;

    if let Some(title) = changes.title {
        entry.set_title(title)?;
    }
    if let Some(username) = changes.username {
        entry.username = username;
    }
    if let Some(url) = changes.url {
        entry.url = url;
    }
    if let Some(notes) = changes.notes {
        entry.notes = notes;
    }
    if let Some(folder) = changes.folder {
        entry.set_folder(folder);
    }

    let estimate = new_secret.map(|secret| {
        let estimate = strength::estimate(&secret);
        entry.secret = secret;
        estimate
    });

    let title = entry.title.clone();
    session.save()?;

    output::success(&format!("Entry #{number} '{title}' updated"));
    if let Some(estimate) = estimate {
        output::strength(&estimate);
    }

    Ok(())
}

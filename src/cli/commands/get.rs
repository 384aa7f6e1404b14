//! `passvault get` — print or copy an entry's password.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::{PassVaultError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, number: usize, copy: bool) -> Result<()> {
    let session = Session::open(cli)?;
    let entry = session.entry(number)?;

    if copy {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PassVaultError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(entry.secret.as_str())
            .map_err(|e| PassVaultError::Clipboard(e.to_string()))?;
        output::success(&format!("Password for '{}' copied to clipboard.", entry.title));
    } else {
        // Plain stdout so the value can be piped.
        println!("{}", entry.secret);
    }

    Ok(())
}

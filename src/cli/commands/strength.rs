//! `passvault strength` — score a password.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::errors::{PassVaultError, Result};
use crate::strength;

/// Execute the `strength` command.
pub fn execute(password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(p) => {
            output::warning("Password given on the command line may end up in shell history.");
            Zeroizing::new(p.to_string())
        }
        None => Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Password to check")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?,
        ),
    };

    output::strength(&strength::estimate(&password));
    Ok(())
}

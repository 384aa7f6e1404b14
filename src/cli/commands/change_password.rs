//! `passvault change-password` — change the vault master password.
//!
//! Decrypts the vault with the current password, then re-encrypts it
//! under the new one with a fresh salt and nonce, written atomically.

use crate::cli::output;
use crate::cli::{load_settings, prompt_new_password, prompt_password, vault_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `change-password` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings)?;
    if !path.exists() {
        output::tip("Run `passvault init` to create a vault.");
        return Err(PassVaultError::NotFound(path));
    }

    // 1. Current password.
    output::info("Enter your current master password.");
    let old_password = prompt_password()?;

    // 2. New password, with confirmation.
    output::info("Choose your new master password.");
    let new_password = prompt_new_password()?;
    if old_password.as_str() == new_password.as_str() {
        output::warning("The new password is the same as the old one; the vault is re-keyed anyway.");
    }

    // 3. Re-encrypt using the configured Argon2 params.
    let store = VaultStore::new(settings.argon2_params());
    let vault = store.change_master_password(
        &path,
        old_password.as_bytes(),
        new_password.as_bytes(),
    )?;

    output::success(&format!(
        "Master password changed ({} entries re-encrypted)",
        vault.len()
    ));

    Ok(())
}

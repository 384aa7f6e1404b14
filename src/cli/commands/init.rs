//! `passvault init` — create a new, empty vault.

use std::fs;

use crate::cli::output;
use crate::cli::{load_settings, prompt_new_password, vault_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings)?;

    // 1. Refuse to touch an existing vault.
    if path.exists() {
        output::tip("Use `passvault add` to add entries to the existing vault.");
        return Err(PassVaultError::AlreadyExists(path));
    }

    // 2. Create the parent directory if it doesn't exist.
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            output::info(&format!("Created directory: {}", dir.display()));
        }
    }

    // 3. Prompt for the master password (with confirmation) and write
    //    the empty vault.
    let password = prompt_new_password()?;
    let store = VaultStore::new(settings.argon2_params());
    store.create(&path, password.as_bytes())?;

    output::success(&format!("Vault created at {}", path.display()));
    output::tip("Run `passvault add <TITLE>` to add an entry.");
    output::tip("Run `passvault generate` to create a strong password.");

    Ok(())
}

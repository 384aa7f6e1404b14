//! `passvault info` — show the unencrypted vault header.

use comfy_table::Table;

use crate::cli::output;
use crate::cli::{load_settings, vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `info` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings)?;
    let header = VaultStore::new(settings.argon2_params()).inspect(&path)?;

    output::info(&format!("Vault file: {}", path.display()));

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Format version".to_string(), header.version.to_string()]);
    table.add_row(vec!["KDF".to_string(), "Argon2id v19".to_string()]);
    table.add_row(vec![
        "Memory".to_string(),
        format!("{} KiB", header.params.memory_kib),
    ]);
    table.add_row(vec![
        "Iterations".to_string(),
        header.params.iterations.to_string(),
    ]);
    table.add_row(vec![
        "Parallelism".to_string(),
        header.params.parallelism.to_string(),
    ]);
    table.add_row(vec![
        "Salt".to_string(),
        format!("{} bytes", header.salt.len()),
    ]);
    table.add_row(vec!["Cipher".to_string(), "AES-256-GCM".to_string()]);
    println!("{table}");

    if header.params != settings.argon2_params() {
        output::tip("KDF params differ from your config; `passvault change-password` applies the new ones.");
    }

    Ok(())
}

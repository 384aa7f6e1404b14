//! The four operations a front-end calls, as plain functions.
//!
//! These use default Argon2id parameters for new vaults. Front-ends that
//! read a config file should build a `VaultStore` with
//! `Settings::argon2_params` instead.
//!
//! Load, save and change-password run the memory-hard KDF and block
//! for a noticeable time; GUI callers should run them on a worker thread.

use std::path::Path;

use crate::errors::Result;
use crate::generator::{self, GeneratorPolicy};
use crate::strength;
use crate::vault::{Vault, VaultStore};

/// Decrypt the vault at `path`. See `VaultStore::load`.
pub fn load_vault(path: impl AsRef<Path>, password: &str) -> Result<Vault> {
    VaultStore::default().load(path.as_ref(), password.as_bytes())
}

/// Encrypt `vault` and atomically replace `path`. See `VaultStore::save`.
pub fn save_vault(path: impl AsRef<Path>, password: &str, vault: &Vault) -> Result<()> {
    VaultStore::default().save(path.as_ref(), password.as_bytes(), vault)
}

/// Generate a random password. Fails with `InvalidPolicy` when the
/// request cannot be satisfied.
pub fn generate_password(
    length: usize,
    use_uppercase: bool,
    use_numbers: bool,
    use_symbols: bool,
    exclude_chars: &str,
) -> Result<String> {
    generator::generate(&GeneratorPolicy {
        length,
        use_uppercase,
        use_numbers,
        use_symbols,
        exclude_chars: exclude_chars.to_string(),
    })
}

/// Generate a word-based passphrase.
pub fn generate_passphrase(word_count: usize, separator: &str) -> Result<String> {
    generator::generate_passphrase(word_count, separator)
}

/// Score a password from 0 to 4.
pub fn check_password_strength(password: &str) -> u8 {
    strength::score(password)
}

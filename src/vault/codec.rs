//! Vault <-> bytes.
//!
//! The plaintext is the JSON form of `Vault`. Field order follows the
//! struct declarations, so the same entries always encode to the same
//! bytes. Decoding is strict: the AEAD tag already vouches for the
//! bytes, so a decode failure means a codec or version mismatch and is
//! reported as `Format`, never patched up.

use zeroize::Zeroizing;

use super::entry::{validate_title, Vault};
use crate::errors::{PassVaultError, Result};

/// Serialize a vault to its canonical byte form.
///
/// Fields are public, so titles are checked again here: an entry whose
/// title was blanked after construction is refused with `InvalidEntry`.
pub fn encode(vault: &Vault) -> Result<Zeroizing<Vec<u8>>> {
    for entry in vault.iter() {
        validate_title(&entry.title)?;
    }
    serde_json::to_vec(vault)
        .map(Zeroizing::new)
        .map_err(|e| PassVaultError::Serialization(format!("vault: {e}")))
}

/// Parse bytes produced by `encode`.
pub fn decode(bytes: &[u8]) -> Result<Vault> {
    let vault: Vault = serde_json::from_slice(bytes)
        .map_err(|e| PassVaultError::Format(format!("vault payload: {e}")))?;

    if let Some(pos) = vault.iter().position(|e| e.title.trim().is_empty()) {
        return Err(PassVaultError::Format(format!(
            "vault payload: entry {} has an empty title",
            pos + 1
        )));
    }
    Ok(vault)
}

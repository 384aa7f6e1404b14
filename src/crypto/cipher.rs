//! AES-256-GCM authenticated encryption with associated data.
//!
//! The vault header is passed as associated data, so a flipped header
//! byte fails the tag check exactly like a flipped ciphertext byte.
//!
//! Layout of a sealed buffer:
//!   [ ciphertext | 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use super::kdf::VaultKey;
use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Draw a fresh random nonce. Called once per save, never reused.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let mut out = [0u8; NONCE_LEN];
    out.copy_from_slice(&nonce);
    out
}

/// Encrypt and authenticate `plaintext`, binding `aad` into the tag.
pub fn seal(key: &VaultKey, nonce: &[u8; NONCE_LEN], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PassVaultError::Encryption(format!("invalid key length: {e}")))?;

    cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| PassVaultError::Encryption(format!("encryption error: {e}")))
}

/// Verify and decrypt a buffer produced by `seal`.
///
/// Any failure, including a short buffer, surfaces as
/// `WrongPasswordOrCorrupt` with no further detail.
pub fn open(
    key: &VaultKey,
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    sealed: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    if sealed.len() < TAG_LEN {
        return Err(PassVaultError::WrongPasswordOrCorrupt);
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| PassVaultError::WrongPasswordOrCorrupt)?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), Payload { msg: sealed, aad })
        .map_err(|_| PassVaultError::WrongPasswordOrCorrupt)?;

    Ok(Zeroizing::new(plaintext))
}

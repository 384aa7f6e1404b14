//! High-level vault operations.
//!
//! `VaultStore` composes the key derivation, codec, cipher and file
//! format layers into `load` / `save`, plus the caller-side helpers
//! `create` and `change_master_password`.

use std::path::Path;

use tracing::{debug, info};

use crate::crypto::cipher::{self, generate_nonce};
use crate::crypto::kdf::{derive_key, generate_salt, Argon2Params, VaultKey};
use crate::errors::{PassVaultError, Result};

use super::codec;
use super::entry::Vault;
use super::format::{self, VaultHeader};
use super::lock::with_path_lock;

/// Entry point for vault persistence.
///
/// Holds the Argon2id parameters applied to *new* vaults and password
/// changes. Existing vaults are always opened with the parameters stored
/// in their own header.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaultStore {
    params: Argon2Params,
}

impl VaultStore {
    /// Build a store that uses `params` for new vaults.
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }

    /// The Argon2id parameters used for new vaults.
    pub fn params(&self) -> Argon2Params {
        self.params
    }

    // ------------------------------------------------------------------
    // Load / save
    // ------------------------------------------------------------------

    /// Read, verify and decrypt the vault at `path`.
    ///
    /// Fails with `NotFound` if the file is absent, `Format` if the
    /// header is unreadable or its version unsupported, and
    /// `WrongPasswordOrCorrupt` if the authentication tag does not verify.
    /// Never returns a partial vault.
    pub fn load(&self, path: &Path, password: &[u8]) -> Result<Vault> {
        let data = format::read_file(path)?;
        let raw = format::parse(&data)?;

        let key = derive_key(password, &raw.header.salt, &raw.header.params)?;
        let plaintext = cipher::open(&key, &raw.header.nonce, raw.header_bytes, raw.sealed)?;
        let vault = codec::decode(&plaintext)?;

        debug!(
            path = %path.display(),
            version = raw.header.version,
            entries = vault.len(),
            "vault loaded"
        );
        Ok(vault)
    }

    /// Encrypt `vault` and atomically replace the file at `path`.
    ///
    /// When `password` opens the existing vault at `path`, its salt and
    /// KDF params are kept. Otherwise (no file, unreadable file, or a
    /// different password, which amounts to a password change) a fresh
    /// salt and this store's params are used. A new nonce is drawn every
    /// time. Concurrent saves to the same path are serialized. On failure
    /// the previous file is left untouched.
    pub fn save(&self, path: &Path, password: &[u8], vault: &Vault) -> Result<()> {
        with_path_lock(path, || {
            let (key, salt, params) = match reusable_key(path, password)? {
                Some(reused) => reused,
                None => self.fresh_key(password)?,
            };
            write_vault(path, &key, vault, salt, params)
        })?;

        debug!(path = %path.display(), entries = vault.len(), "vault saved");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Caller-side helpers
    // ------------------------------------------------------------------

    /// Create a new, empty vault at `path`.
    ///
    /// Fails with `AlreadyExists` rather than overwriting an existing file.
    pub fn create(&self, path: &Path, password: &[u8]) -> Result<Vault> {
        let vault = Vault::new();
        with_path_lock(path, || {
            if path.exists() {
                return Err(PassVaultError::AlreadyExists(path.to_path_buf()));
            }
            let (key, salt, params) = self.fresh_key(password)?;
            write_vault(path, &key, &vault, salt, params)
        })?;

        info!(path = %path.display(), "vault created");
        Ok(vault)
    }

    /// Re-encrypt the vault at `path` under a new master password.
    ///
    /// The old password must open the vault. The new file gets a fresh
    /// salt, this store's current params and a fresh nonce.
    pub fn change_master_password(
        &self,
        path: &Path,
        old_password: &[u8],
        new_password: &[u8],
    ) -> Result<Vault> {
        with_path_lock(path, || {
            let vault = self.load(path, old_password)?;
            let (key, salt, params) = self.fresh_key(new_password)?;
            write_vault(path, &key, &vault, salt, params)?;
            Ok(vault)
        })
        .map(|vault| {
            info!(path = %path.display(), entries = vault.len(), "master password changed");
            vault
        })
    }

    /// Read the unencrypted header of the vault at `path`.
    pub fn inspect(&self, path: &Path) -> Result<VaultHeader> {
        let data = format::read_file(path)?;
        Ok(format::parse(&data)?.header)
    }

    /// A key under a new random salt and this store's params.
    fn fresh_key(&self, password: &[u8]) -> Result<(VaultKey, Vec<u8>, Argon2Params)> {
        let salt = generate_salt()?.to_vec();
        let key = derive_key(password, &salt, &self.params)?;
        Ok((key, salt, self.params))
    }
}

/// The key, salt and params of the vault at `path`, if `password` opens it.
///
/// The derived key is the one the save needs anyway, so checking it
/// against the current file only costs an AES-GCM pass.
fn reusable_key(
    path: &Path,
    password: &[u8],
) -> Result<Option<(VaultKey, Vec<u8>, Argon2Params)>> {
    let Ok(data) = format::read_file(path) else {
        return Ok(None);
    };
    let Ok(raw) = format::parse(&data) else {
        return Ok(None);
    };

    let key = derive_key(password, &raw.header.salt, &raw.header.params)?;
    if cipher::open(&key, &raw.header.nonce, raw.header_bytes, raw.sealed).is_err() {
        debug!(path = %path.display(), "existing vault not opened by this password, drawing a fresh salt");
        return Ok(None);
    }
    Ok(Some((key, raw.header.salt, raw.header.params)))
}

/// Encode, seal, frame and atomically write. Callers hold the path lock.
fn write_vault(
    path: &Path,
    key: &VaultKey,
    vault: &Vault,
    salt: Vec<u8>,
    params: Argon2Params,
) -> Result<()> {
    let plaintext = codec::encode(vault)?;

    let header = VaultHeader::new(params, salt, generate_nonce());
    let header_bytes = header.to_bytes()?;
    let sealed = cipher::seal(key, &header.nonce, &header_bytes, &plaintext)?;

    let mut buf = Vec::with_capacity(header_bytes.len() + sealed.len());
    buf.extend_from_slice(&header_bytes);
    buf.extend_from_slice(&sealed);

    format::write_atomic(path, &buf)
}

//! Binary vault file format and atomic file replacement.
//!
//! A `.pvlt` file has this layout (integers little-endian):
//!
//! ```text
//! [PVLT: 4][version: 1][memory_kib: 4][iterations: 4][parallelism: 4]
//! [salt_len: 1][salt: salt_len][nonce: 12][ciphertext + 16-byte GCM tag]
//! ```
//!
//! - **Magic** (`PVLT`): identifies the file as a PassVault vault.
//! - **Version**: format version (currently `1`). Checked before any
//!   other field is interpreted.
//! - **KDF params**: the Argon2id costs the key was derived with.
//! - **Salt / nonce**: stored in the clear; needed before the key exists.
//!
//! Everything before the ciphertext is the header, and the header bytes
//! are the associated data of the AEAD seal.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::warn;

use crate::crypto::kdf::{Argon2Params, MAX_SALT_LEN, MIN_SALT_LEN};
use crate::crypto::{NONCE_LEN, TAG_LEN};
use crate::errors::{PassVaultError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every vault file.
const MAGIC: &[u8; 4] = b"PVLT";

/// Current binary format version.
pub const CURRENT_VERSION: u8 = 1;

/// 4 (magic) + 1 (version).
const PREAMBLE_LEN: usize = 5;

/// 3 x u32 KDF params + 1 (salt_len).
const PARAMS_LEN: usize = 13;

// ---------------------------------------------------------------------------
// VaultHeader
// ---------------------------------------------------------------------------

/// The unencrypted metadata at the start of a vault file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultHeader {
    pub version: u8,
    pub params: Argon2Params,
    pub salt: Vec<u8>,
    pub nonce: [u8; NONCE_LEN],
}

impl VaultHeader {
    /// Build a current-version header.
    pub fn new(params: Argon2Params, salt: Vec<u8>, nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            version: CURRENT_VERSION,
            params,
            salt,
            nonce,
        }
    }

    /// Serialize the header. These bytes double as the AEAD associated data.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let salt_len = u8::try_from(self.salt.len())
            .ok()
            .filter(|len| (MIN_SALT_LEN..=MAX_SALT_LEN).contains(&usize::from(*len)))
            .ok_or_else(|| {
                PassVaultError::Format(format!("salt length {} out of range", self.salt.len()))
            })?;

        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.extend_from_slice(MAGIC); // 4 bytes
        buf.push(self.version); // 1 byte
        buf.extend_from_slice(&self.params.memory_kib.to_le_bytes());
        buf.extend_from_slice(&self.params.iterations.to_le_bytes());
        buf.extend_from_slice(&self.params.parallelism.to_le_bytes());
        buf.push(salt_len);
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        Ok(buf)
    }

    /// Number of bytes `to_bytes` produces.
    pub fn encoded_len(&self) -> usize {
        PREAMBLE_LEN + PARAMS_LEN + self.salt.len() + NONCE_LEN
    }
}

/// A vault file split into its parts, borrowing from the raw bytes.
pub struct RawVault<'a> {
    pub header: VaultHeader,
    /// The header bytes exactly as stored on disk (the associated data).
    pub header_bytes: &'a [u8],
    /// Ciphertext followed by the authentication tag.
    pub sealed: &'a [u8],
}

/// Parse the header of a vault file and split off the ciphertext.
///
/// Rejects bad magic, unknown versions, truncated data and out-of-range
/// KDF params with `Format`. Nothing here needs the password.
pub fn parse(data: &[u8]) -> Result<RawVault<'_>> {
    if data.len() < PREAMBLE_LEN {
        return Err(PassVaultError::Format(
            "file too small to be a valid vault".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(PassVaultError::Format("missing PVLT magic bytes".into()));
    }

    let version = data[4];
    if version != CURRENT_VERSION {
        return Err(PassVaultError::Format(format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let fixed_end = PREAMBLE_LEN + PARAMS_LEN;
    if data.len() < fixed_end {
        return Err(PassVaultError::Format("truncated header".into()));
    }

    let params = Argon2Params {
        memory_kib: read_u32(data, PREAMBLE_LEN)?,
        iterations: read_u32(data, PREAMBLE_LEN + 4)?,
        parallelism: read_u32(data, PREAMBLE_LEN + 8)?,
    };
    params.check_bounds().map_err(PassVaultError::Format)?;

    let salt_len = usize::from(data[fixed_end - 1]);
    if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&salt_len) {
        return Err(PassVaultError::Format(format!(
            "salt length {salt_len} out of range"
        )));
    }

    let salt_end = fixed_end + salt_len;
    let header_end = salt_end + NONCE_LEN;
    if data.len() < header_end + TAG_LEN {
        return Err(PassVaultError::Format(
            "file too small to hold the ciphertext".into(),
        ));
    }

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&data[salt_end..header_end]);

    Ok(RawVault {
        header: VaultHeader {
            version,
            params,
            salt: data[fixed_end..salt_end].to_vec(),
            nonce,
        },
        header_bytes: &data[..header_end],
        sealed: &data[header_end..],
    })
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    data.get(offset..offset + 4)
        .and_then(|slice| slice.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| PassVaultError::Format("truncated header".into()))
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Read a vault file, mapping a missing path to `NotFound`.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PassVaultError::NotFound(path.to_path_buf()),
        _ => PassVaultError::Io(e),
    })
}

/// Write `bytes` to a fresh temp file beside `path` and flush it to disk.
///
/// The target is not touched. Dropping the returned handle without
/// calling `commit` deletes the temp file.
pub(crate) fn stage(path: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = format!(
        ".{}.",
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    // Same directory as the target, so the rename stays on one filesystem.
    let mut tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Atomically rename a staged temp file over `path`.
///
/// Once the rename succeeds the new file is live and this returns `Ok`.
/// A failure to sync the directory afterwards is logged, not returned.
pub(crate) fn commit(staged: NamedTempFile, path: &Path) -> Result<()> {
    commit_with(staged, path, sync_parent)
}

fn commit_with(
    staged: NamedTempFile,
    path: &Path,
    sync_dir: impl FnOnce(&Path) -> std::io::Result<()>,
) -> Result<()> {
    staged.persist(path).map_err(|e| PassVaultError::Io(e.error))?;

    if let Err(e) = sync_dir(path) {
        warn!(path = %path.display(), error = %e, "vault replaced but directory sync failed");
    }

    Ok(())
}

/// Flush the directory entry of `path` so the rename survives a crash.
fn sync_parent(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::File::open(parent)?.sync_all()?;
        }
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

/// Replace `path` with `bytes` so readers only ever see the old or the
/// new file, never a half-written one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let staged = stage(path, bytes)?;
    commit(staged, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_header() -> VaultHeader {
        VaultHeader::new(
            Argon2Params {
                memory_kib: 8_192,
                iterations: 1,
                parallelism: 1,
            },
            vec![0x11; 32],
            [0x22; NONCE_LEN],
        )
    }

    fn sample_file() -> Vec<u8> {
        let mut data = sample_header().to_bytes().unwrap();
        data.extend_from_slice(&[0x33; 40]);
        data
    }

    #[test]
    fn header_parses_back() {
        let data = sample_file();
        let raw = parse(&data).unwrap();
        assert_eq!(raw.header, sample_header());
        assert_eq!(raw.header_bytes.len(), sample_header().encoded_len());
        assert_eq!(raw.sealed, &[0x33; 40][..]);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = sample_file();
        data[0] = b'X';
        assert!(matches!(parse(&data), Err(PassVaultError::Format(_))));
    }

    #[test]
    fn rejects_future_version() {
        let mut data = sample_file();
        data[4] = CURRENT_VERSION + 1;
        let err = parse(&data).err().unwrap();
        assert!(err.to_string().contains("unsupported version"));
    }

    #[test]
    fn rejects_truncated_files() {
        let data = sample_file();
        for len in [0, 3, 5, 17, 30, sample_header().encoded_len() + TAG_LEN - 1] {
            assert!(
                matches!(parse(&data[..len]), Err(PassVaultError::Format(_))),
                "length {len} must be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_params() {
        let mut data = sample_file();
        // High byte of iterations.
        data[PREAMBLE_LEN + 7] = 0xFF;
        assert!(matches!(parse(&data), Err(PassVaultError::Format(_))));
    }

    #[test]
    fn rejects_short_salt() {
        let mut header = sample_header();
        header.salt = vec![1; 8];
        assert!(header.to_bytes().is_err());

        let mut data = sample_file();
        data[PREAMBLE_LEN + PARAMS_LEN - 1] = 8;
        assert!(matches!(parse(&data), Err(PassVaultError::Format(_))));
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.pvlt");
        assert!(matches!(read_file(&path), Err(PassVaultError::NotFound(p)) if p == path));
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("v.pvlt");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        // No temp files left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_directory_sync_after_rename_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("v.pvlt");
        write_atomic(&path, b"old").unwrap();

        let staged = stage(&path, b"new").unwrap();
        let result = commit_with(staged, &path, |_| {
            Err(std::io::Error::new(ErrorKind::Other, "fsync refused"))
        });

        assert!(result.is_ok());
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn directory_sync_needs_an_existing_parent() {
        let dir = TempDir::new().unwrap();
        assert!(sync_parent(&dir.path().join("v.pvlt")).is_ok());
        assert!(sync_parent(&dir.path().join("gone").join("v.pvlt")).is_err());
    }

    #[test]
    fn abandoned_stage_leaves_target_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("v.pvlt");
        write_atomic(&path, b"committed").unwrap();

        let staged = stage(&path, b"never committed").unwrap();
        assert!(staged.path().exists());
        assert_eq!(fs::read(&path).unwrap(), b"committed");

        drop(staged);
        assert_eq!(fs::read(&path).unwrap(), b"committed");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}

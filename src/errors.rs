use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Vault store errors ---
    /// The vault file does not exist. A normal first-run condition:
    /// the caller decides whether to create a new vault.
    #[error("Vault not found at {0}")]
    NotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    AlreadyExists(PathBuf),

    /// AEAD verification failed. Deliberately carries no detail.
    #[error("Wrong master password or corrupted vault")]
    WrongPasswordOrCorrupt,

    #[error("Invalid vault format: {0}")]
    Format(String),

    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    // --- Generator errors ---
    #[error("Invalid generator policy: {0}")]
    InvalidPolicy(String),

    // --- Entry errors ---
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("No entry #{0} in this vault")]
    EntryNotFound(usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;

//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `Vault` plaintext types (`entry`)
//! - Canonical vault serialization (`codec`)
//! - Binary vault file format and atomic writes (`format`)
//! - Per-path write serialization (`lock`)
//! - High-level `VaultStore` for loading and saving vaults (`store`)

pub mod codec;
pub mod entry;
pub mod format;
pub mod lock;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, Vault, DEFAULT_FOLDER};
pub use format::VaultHeader;
pub use store::VaultStore;

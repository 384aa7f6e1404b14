pub mod api;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod strength;
pub mod vault;

pub use api::{check_password_strength, generate_passphrase, generate_password, load_vault, save_vault};
pub use errors::{PassVaultError, Result};

//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::{Entry, Vault, VaultStore};

/// Minimum master password length to prevent trivially weak passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// Environment variable supplying the master password non-interactively.
pub const PASSWORD_ENV: &str = "PASSVAULT_PASSWORD";

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "passvault", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: `vault_file` from .passvault.toml, else ./vault.pvlt)
    #[arg(long, global = true, env = "PASSVAULT_FILE")]
    pub vault: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty vault
    Init,

    /// Add an entry
    Add {
        /// Entry title (e.g. "Bank")
        title: String,
        #[arg(short, long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Folder (default: General)
        #[arg(short, long, default_value = "")]
        folder: String,
        /// Generate the password instead of prompting for it
        #[arg(short, long)]
        generate: bool,
    },

    /// List entries (secrets are never shown)
    List {
        /// Only show entries in this folder
        #[arg(short, long)]
        folder: Option<String>,
        /// Filter by title, username, URL or folder
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print an entry's password
    Get {
        /// Entry number as shown by `list`
        number: usize,
        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// Change fields of an entry
    Edit {
        /// Entry number as shown by `list`
        number: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(short, long)]
        folder: Option<String>,
        /// Prompt for a new password
        #[arg(long, conflicts_with = "generate")]
        password: bool,
        /// Replace the password with a generated one
        #[arg(short, long)]
        generate: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry number as shown by `list`
        number: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password
    Generate {
        /// Password length (default: from config, else 20)
        #[arg(short, long)]
        length: Option<usize>,
        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,
        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,
        /// Characters to never use
        #[arg(short, long)]
        exclude: Option<String>,
    },

    /// Generate a word-based passphrase
    Passphrase {
        /// Number of words
        #[arg(short, long, default_value = "6")]
        words: usize,
        /// Word separator
        #[arg(short, long, default_value = "-")]
        separator: String,
    },

    /// Score a password's strength (0-4)
    Strength {
        /// Password to check (omit for a hidden prompt)
        password: Option<String>,
    },

    /// Change the vault's master password
    ChangePassword,

    /// Show the vault file header (no password needed)
    Info,

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Settings from `.passvault.toml` in the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Resolve the vault file: `--vault` wins, then the config file.
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    match &cli.vault {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(settings.vault_path(&std::env::current_dir()?)),
    }
}

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripts and tests)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation.
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.
/// Enforces a minimum password length.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Read an entry password: from stdin when piped, otherwise via a
/// hidden prompt with confirmation.
pub fn prompt_entry_secret(title: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        zeroize::Zeroize::zeroize(&mut line);
        return Ok(Zeroizing::new(trimmed));
    }

    let secret = dialoguer::Password::new()
        .with_prompt(format!("Password for {title}"))
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(secret))
}

/// An unlocked vault plus everything needed to write it back.
pub struct Session {
    pub path: PathBuf,
    pub password: Zeroizing<String>,
    pub vault: Vault,
    pub store: VaultStore,
    pub settings: Settings,
}

impl Session {
    /// Resolve the vault path, ask for the password and decrypt.
    ///
    /// A missing vault gets a hint to run `init`; the decision is made
    /// on the `NotFound` error kind, never on message text.
    pub fn open(cli: &Cli) -> Result<Self> {
        let settings = load_settings()?;
        let path = vault_path(cli, &settings)?;
        let store = VaultStore::new(settings.argon2_params());

        // Checked up front so nobody types a password for a missing file.
        if !path.exists() {
            output::tip("Run `passvault init` to create a vault.");
            return Err(PassVaultError::NotFound(path));
        }

        let password = prompt_password()?;
        let vault = match store.load(&path, password.as_bytes()) {
            Err(PassVaultError::NotFound(missing)) => {
                output::tip("Run `passvault init` to create a vault.");
                return Err(PassVaultError::NotFound(missing));
            }
            other => other?,
        };

        Ok(Self {
            path,
            password,
            vault,
            store,
            settings,
        })
    }

    /// Encrypt and write the vault back.
    pub fn save(&self) -> Result<()> {
        self.store
            .save(&self.path, self.password.as_bytes(), &self.vault)
    }

    /// Map a 1-based entry number from `list` to a vault index.
    pub fn index_of(&self, number: usize) -> Result<usize> {
        entry_index(&self.vault, number)
    }

    pub fn entry(&self, number: usize) -> Result<&Entry> {
        let idx = self.index_of(number)?;
        self.vault
            .get(idx)
            .ok_or(PassVaultError::EntryNotFound(number))
    }
}

/// Map a 1-based entry number to a zero-based index.
pub fn entry_index(vault: &Vault, number: usize) -> Result<usize> {
    if number == 0 || number > vault.len() {
        return Err(PassVaultError::EntryNotFound(number));
    }
    Ok(number - 1)
}

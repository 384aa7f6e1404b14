//! Entry and Vault types: the plaintext data model.
//!
//! Entries are plain owned values. Order is insertion order and only
//! matters for display; entries are addressed by position, never by
//! title, because titles are not unique.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

/// Folder assigned to entries that do not name one.
pub const DEFAULT_FOLDER: &str = "General";

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

/// One credential record.
///
/// Every string is wiped from memory when the entry is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(deny_unknown_fields)]
#[zeroize(drop)]
pub struct Entry {
    pub title: String,
    pub username: String,
    pub secret: String,
    pub url: String,
    pub notes: String,
    #[serde(default = "default_folder")]
    pub folder: String,
}

impl Entry {
    /// Create an entry with a title and secret; every other field is
    /// empty and the folder is `"General"`.
    pub fn new(title: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            title,
            username: String::new(),
            secret: secret.into(),
            url: String::new(),
            notes: String::new(),
            folder: default_folder(),
        })
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Set the folder. A blank name falls back to `"General"`.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.set_folder(folder);
        self
    }

    pub fn set_folder(&mut self, folder: impl Into<String>) {
        let folder = folder.into();
        self.folder = if folder.trim().is_empty() {
            default_folder()
        } else {
            folder
        };
    }

    /// Replace the title, keeping the non-empty invariant.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }
}

// Secrets must never end up in logs or panic messages.
impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .field("url", &self.url)
            .field("folder", &self.folder)
            .finish_non_exhaustive()
    }
}

pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PassVaultError::InvalidEntry(
            "entry title cannot be empty".into(),
        ));
    }
    Ok(())
}

/// An ordered list of entries. The empty vault is the initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vault {
    pub entries: Vec<Entry>,
}

impl Vault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Entry at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Mutable entry at a zero-based position (for edits).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Remove and return the entry at a zero-based position.
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Distinct folder names in first-seen order.
    pub fn folders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.folder.as_str()) {
                seen.push(&entry.folder);
            }
        }
        seen
    }

    /// Case-insensitive substring search over title, username, url and
    /// folder. Returns zero-based positions with their entries.
    ///
    /// An empty query matches everything. Secrets and notes are never searched.
    pub fn search(&self, query: &str) -> Vec<(usize, &Entry)> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                [&e.title, &e.username, &e.url, &e.folder]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

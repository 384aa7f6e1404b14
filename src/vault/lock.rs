//! Per-path serialization of vault writes.
//!
//! Two saves to the same vault file must not interleave their
//! temp-write-then-rename sequences. Each canonical path gets its own
//! mutex; saves to different paths proceed in parallel. Loads never
//! take these locks.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::errors::Result;

type Registry = Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>;

fn registry() -> &'static Registry {
    static LOCKS: OnceLock<Registry> = OnceLock::new();
    LOCKS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Canonical form of a vault path that may not exist yet: the
/// canonicalized parent directory joined with the file name.
pub fn canonical_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Ok(fs::canonicalize(parent)?.join(file_name))
}

/// Run `f` while holding the write lock for `path`.
pub fn with_path_lock<T>(path: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let key = canonical_path(path)?;

    let slot = {
        let mut map = registry().lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(map.entry(key.clone()).or_default())
    };

    let result = {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        let _guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    };

    // Forget the slot once nobody else is waiting on it.
    let mut map = registry().lock().unwrap_or_else(PoisonError::into_inner);
    if Arc::strong_count(&slot) == 2 {
        map.remove(&key);
    }

    result
}

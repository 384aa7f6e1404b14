//! Integration tests for vault persistence.

use std::fs;
use std::sync::Arc;
use std::thread;

use passvault::crypto::Argon2Params;
use passvault::vault::{Entry, Vault, VaultStore};
use passvault::PassVaultError;
use tempfile::TempDir;

/// Helper: create a temporary vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("test.pvlt");
    (dir, path)
}

/// Cheap Argon2 params so tests stay fast.
fn fast_store() -> VaultStore {
    VaultStore::new(Argon2Params {
        memory_kib: 8_192,
        iterations: 1,
        parallelism: 1,
    })
}

fn bank_entry() -> Entry {
    Entry::new("Bank", "x")
        .unwrap()
        .with_username("alice")
        .with_url("bank.example")
        .with_notes("")
        .with_folder("Finance")
}

// ---------------------------------------------------------------------------
// Save and re-load round-trip
// ---------------------------------------------------------------------------

#[test]
fn bank_entry_scenario() {
    let (_dir, path) = vault_path();
    let store = fast_store();

    // Fresh path: load reports NotFound, the caller decides to create.
    let result = store.load(&path, b"correct-horse");
    assert!(matches!(result, Err(PassVaultError::NotFound(_))));

    let mut vault = Vault::new();
    vault.add(bank_entry());
    store.save(&path, b"correct-horse", &vault).unwrap();

    let loaded = store.load(&path, b"correct-horse").unwrap();
    assert_eq!(loaded.len(), 1);
    let entry = loaded.get(0).unwrap();
    assert_eq!(entry.title, "Bank");
    assert_eq!(entry.username, "alice");
    assert_eq!(entry.secret, "x");
    assert_eq!(entry.url, "bank.example");
    assert_eq!(entry.notes, "");
    assert_eq!(entry.folder, "Finance");

    let wrong = store.load(&path, b"wrong-pw");
    assert!(matches!(wrong, Err(PassVaultError::WrongPasswordOrCorrupt)));
}

#[test]
fn roundtrip_preserves_order_and_fields() {
    let (_dir, path) = vault_path();
    let store = fast_store();

    let mut vault = Vault::new();
    vault.add(Entry::new("Zeta", "z").unwrap());
    vault.add(bank_entry());
    vault.add(
        Entry::new("Alpha \u{1F511}", "p\u{00e4}ss \"quoted\"\n")
            .unwrap()
            .with_notes("multi\nline notes"),
    );
    vault.add(Entry::new("Zeta", "duplicate title").unwrap());

    store.save(&path, b"pw", &vault).unwrap();
    assert_eq!(store.load(&path, b"pw").unwrap(), vault);
}

#[test]
fn blank_title_is_never_written() {
    let (_dir, path) = vault_path();
    let store = fast_store();

    let mut vault = Vault::new();
    vault.add(bank_entry());
    store.save(&path, b"pw", &vault).unwrap();
    let before = fs::read(&path).unwrap();

    vault.get_mut(0).unwrap().title = String::new();
    let result = store.save(&path, b"pw", &vault);
    assert!(matches!(result, Err(PassVaultError::InvalidEntry(_))));

    // The previous vault is still the one on disk.
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(store.load(&path, b"pw").unwrap().get(0).unwrap().title, "Bank");
}

#[test]
fn empty_vault_roundtrip() {
    let (_dir, path) = vault_path();
    let store = fast_store();
    store.save(&path, b"pw", &Vault::new()).unwrap();
    assert!(store.load(&path, b"pw").unwrap().is_empty());
}

#[test]
fn default_params_roundtrip() {
    let (_dir, path) = vault_path();
    let store = VaultStore::default();

    let mut vault = Vault::new();
    vault.add(bank_entry());
    store.save(&path, b"default-params", &vault).unwrap();

    assert_eq!(store.load(&path, b"default-params").unwrap(), vault);
    assert_eq!(store.inspect(&path).unwrap().params, Argon2Params::default());
}

#[test]
fn vault_saved_with_old_params_opens_with_new_defaults() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::new();
    vault.add(bank_entry());
    fast_store().save(&path, b"pw", &vault).unwrap();

    // A store configured differently still opens it: params come from the header.
    let reconfigured = VaultStore::new(Argon2Params {
        memory_kib: 16_384,
        iterations: 2,
        parallelism: 2,
    });
    assert_eq!(reconfigured.load(&path, b"pw").unwrap(), vault);
}

#[test]
fn saving_twice_produces_different_ciphertext() {
    let (_dir, path) = vault_path();
    let store = fast_store();
    let mut vault = Vault::new();
    vault.add(bank_entry());

    store.save(&path, b"pw", &vault).unwrap();
    let first = fs::read(&path).unwrap();
    store.save(&path, b"pw", &vault).unwrap();
    let second = fs::read(&path).unwrap();

    assert_ne!(first, second, "a fresh nonce must be used for every save");
}

// ---------------------------------------------------------------------------
// Wrong password, tampering and format errors
// ---------------------------------------------------------------------------

#[test]
fn wrong_password_fails_to_open() {
    let (_dir, path) = vault_path();
    let store = fast_store();
    store.save(&path, b"correct-password", &Vault::new()).unwrap();

    for attempt in [
        &b"wrong-password"[..],
        &b""[..],
        &b"correct-passwore"[..],
        &b"Correct-password"[..],
    ] {
        let result = store.load(&path, attempt);
        assert!(
            matches!(result, Err(PassVaultError::WrongPasswordOrCorrupt)),
            "wrong password must fail to open vault"
        );
    }
}

#[test]
fn every_single_byte_flip_is_detected() {
    let (_dir, path) = vault_path();
    let store = fast_store();
    let mut vault = Vault::new();
    vault.add(bank_entry());
    store.save(&path, b"tamper-pw", &vault).unwrap();

    let original = fs::read(&path).unwrap();
    for i in 0..original.len() {
        let mut data = original.clone();
        data[i] ^= 0x01;
        fs::write(&path, &data).unwrap();

        let result = store.load(&path, b"tamper-pw");
        assert!(
            matches!(
                result,
                Err(PassVaultError::WrongPasswordOrCorrupt) | Err(PassVaultError::Format(_))
            ),
            "flipping byte {i} must make load fail"
        );
    }
}

#[test]
fn truncated_file_is_rejected() {
    let (_dir, path) = vault_path();
    let store = fast_store();
    store.save(&path, b"pw", &Vault::new()).unwrap();

    let data = fs::read(&path).unwrap();
    fs::write(&path, &data[..data.len() - 1]).unwrap();
    assert!(store.load(&path, b"pw").is_err());

    fs::write(&path, &data[..10]).unwrap();
    assert!(matches!(
        store.load(&path, b"pw"),
        Err(PassVaultError::Format(_))
    ));
}

#[test]
fn unknown_version_is_a_format_error() {
    let (_dir, path) = vault_path();
    let store = fast_store();
    store.save(&path, b"pw", &Vault::new()).unwrap();

    let mut data = fs::read(&path).unwrap();
    data[4] = 2;
    fs::write(&path, &data).unwrap();

    let err = store.load(&path, b"pw").unwrap_err();
    assert!(matches!(err, PassVaultError::Format(_)));
    assert!(err.to_string().contains("unsupported version"));
}

#[test]
fn random_file_is_a_format_error() {
    let (_dir, path) = vault_path();
    fs::write(&path, b"{\"entries\":[]}").unwrap();
    assert!(matches!(
        fast_store().load(&path, b"pw"),
        Err(PassVaultError::Format(_))
    ));
}

// ---------------------------------------------------------------------------
// Atomic replacement and concurrency
// ---------------------------------------------------------------------------

#[test]
fn failed_save_leaves_previous_vault_intact() {
    let (dir, path) = vault_path();
    let store = fast_store();
    let mut vault = Vault::new();
    vault.add(bank_entry());
    store.save(&path, b"pw", &vault).unwrap();
    let before = fs::read(&path).unwrap();

    // Saving to the path of a directory fails at the rename.
    let as_dir = dir.path().join("occupied");
    fs::create_dir(&as_dir).unwrap();
    fs::write(as_dir.join("child"), b"x").unwrap();
    assert!(store.save(&as_dir, b"pw", &vault).is_err());

    assert_eq!(fs::read(&path).unwrap(), before);
    // Only the vault and the directory remain: no stray temp files.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn concurrent_saves_leave_one_complete_vault() {
    let (_dir, path) = vault_path();
    let path = Arc::new(path);
    let store = fast_store();

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let path = Arc::clone(&path);
            thread::spawn(move || {
                let mut vault = Vault::new();
                for j in 0..=i {
                    vault.add(Entry::new(format!("entry {j}"), format!("secret {i}")).unwrap());
                }
                store.save(&path, b"shared-pw", &vault).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Whichever save landed last, the file is a complete, valid vault.
    let loaded = store.load(&path, b"shared-pw").unwrap();
    assert!((1..=6).contains(&loaded.len()));
    let expected_secret = format!("secret {}", loaded.len() - 1);
    assert!(loaded.iter().all(|e| e.secret == expected_secret));
}

#[test]
fn load_after_save_sees_new_content() {
    let (_dir, path) = vault_path();
    let store = fast_store();

    let mut vault = Vault::new();
    for i in 0..3 {
        vault.add(Entry::new(format!("entry {i}"), "pw").unwrap());
        store.save(&path, b"pw", &vault).unwrap();
        assert_eq!(store.load(&path, b"pw").unwrap().len(), i + 1);
    }
}

// ---------------------------------------------------------------------------
// Create and change password
// ---------------------------------------------------------------------------

#[test]
fn create_then_load() {
    let (_dir, path) = vault_path();
    let store = fast_store();

    store.create(&path, b"first-run").unwrap();
    assert!(store.load(&path, b"first-run").unwrap().is_empty());

    let again = store.create(&path, b"first-run");
    assert!(matches!(again, Err(PassVaultError::AlreadyExists(_))));
}

#[test]
fn change_master_password_keeps_entries() {
    let (_dir, path) = vault_path();
    let store = fast_store();

    let mut vault = Vault::new();
    vault.add(bank_entry());
    vault.add(Entry::new("Mail", "m").unwrap());
    store.save(&path, b"old-password", &vault).unwrap();

    let rekeyed = store
        .change_master_password(&path, b"old-password", b"new-password")
        .unwrap();
    assert_eq!(rekeyed, vault);

    assert_eq!(store.load(&path, b"new-password").unwrap(), vault);
    assert!(matches!(
        store.load(&path, b"old-password"),
        Err(PassVaultError::WrongPasswordOrCorrupt)
    ));
}

#[test]
fn change_password_on_missing_vault_is_not_found() {
    let (_dir, path) = vault_path();
    let result = fast_store().change_master_password(&path, b"a", b"b");
    assert!(matches!(result, Err(PassVaultError::NotFound(_))));
}

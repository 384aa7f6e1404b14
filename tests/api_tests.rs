//! Integration tests for the four front-end operations.

use passvault::generator::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use passvault::vault::{Entry, Vault};
use passvault::{
    check_password_strength, generate_passphrase, generate_password, load_vault, save_vault,
    PassVaultError,
};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// load_vault / save_vault
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_with_default_params() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.pvlt");

    assert!(matches!(
        load_vault(&path, "correct-horse"),
        Err(PassVaultError::NotFound(_))
    ));

    let mut vault = Vault::new();
    vault.add(
        Entry::new("Bank", "x")
            .unwrap()
            .with_username("alice")
            .with_url("bank.example")
            .with_folder("Finance"),
    );
    save_vault(&path, "correct-horse", &vault).unwrap();

    assert_eq!(load_vault(&path, "correct-horse").unwrap(), vault);
    assert!(matches!(
        load_vault(&path, "wrong-pw"),
        Err(PassVaultError::WrongPasswordOrCorrupt)
    ));
}

// ---------------------------------------------------------------------------
// generate_password
// ---------------------------------------------------------------------------

#[test]
fn generated_password_contains_every_class() {
    for length in [4, 5, 12, 32] {
        for _ in 0..50 {
            let pw = generate_password(length, true, true, true, "").unwrap();
            assert_eq!(pw.chars().count(), length);
            for set in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
                assert!(pw.chars().any(|c| set.contains(c)), "{pw} misses {set}");
            }
        }
    }
}

#[test]
fn generated_password_respects_exclusions() {
    for _ in 0..50 {
        let pw = generate_password(40, true, true, true, "O0Il1|").unwrap();
        assert!(!pw.chars().any(|c| "O0Il1|".contains(c)), "{pw}");
    }
}

#[test]
fn lowercase_only_policy() {
    let pw = generate_password(30, false, false, false, "").unwrap();
    assert!(pw.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn invalid_policies_are_rejected() {
    assert!(matches!(
        generate_password(0, true, true, true, ""),
        Err(PassVaultError::InvalidPolicy(_))
    ));
    assert!(matches!(
        generate_password(10, false, false, false, LOWERCASE),
        Err(PassVaultError::InvalidPolicy(_))
    ));
}

#[test]
fn short_lengths_are_valid() {
    for length in 1..=3 {
        let pw = generate_password(length, true, true, true, "").unwrap();
        assert_eq!(pw.chars().count(), length);
    }
}

#[test]
fn generated_passwords_differ() {
    let a = generate_password(24, true, true, true, "").unwrap();
    let b = generate_password(24, true, true, true, "").unwrap();
    assert_ne!(a, b);
}

#[test]
fn passphrase_has_requested_words() {
    let phrase = generate_passphrase(5, "-").unwrap();
    assert_eq!(phrase.split('-').count(), 5);
    assert!(generate_passphrase(0, "-").is_err());
}

// ---------------------------------------------------------------------------
// check_password_strength
// ---------------------------------------------------------------------------

#[test]
fn strength_edge_cases() {
    assert_eq!(check_password_strength(""), 0);
    assert!(check_password_strength("aaaaaaaa") <= check_password_strength("aB3$xY9!"));
    assert!(check_password_strength("1234") <= 1);
}

#[test]
fn strength_grows_with_length() {
    let long = "Vt8#qL2!mZ7@kR4$wP9^xN3&";
    let mut previous = 0;
    for len in 1..=long.len() {
        let score = check_password_strength(&long[..len]);
        assert!(score <= 4);
        assert!(score >= previous, "score dropped at length {len}");
        previous = score;
    }
    assert_eq!(previous, 4);
}

#[test]
fn generated_passwords_score_well() {
    for _ in 0..20 {
        let pw = generate_password(20, true, true, true, "").unwrap();
        assert!(check_password_strength(&pw) >= 3, "{pw}");
    }
}

//! Random password and passphrase generation.
//!
//! Every pick comes from the operating system's CSPRNG: a generated
//! password is itself a secret, so a seeded general-purpose PRNG is
//! never used here.

mod wordlist;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, TryRngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

pub use wordlist::WORDS;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}";

/// Which characters a generated password may contain.
///
/// Lowercase letters are always a candidate class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorPolicy {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
    /// Characters removed from every selected class.
    pub exclude_chars: String,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            length: 20,
            use_uppercase: true,
            use_numbers: true,
            use_symbols: true,
            exclude_chars: String::new(),
        }
    }
}

impl GeneratorPolicy {
    /// The enabled classes with exclusions applied. Classes left empty
    /// by the exclusions are dropped.
    pub fn classes(&self) -> Vec<Vec<char>> {
        let mut sets = vec![LOWERCASE];
        if self.use_uppercase {
            sets.push(UPPERCASE);
        }
        if self.use_numbers {
            sets.push(DIGITS);
        }
        if self.use_symbols {
            sets.push(SYMBOLS);
        }

        sets.into_iter()
            .map(|set| {
                set.chars()
                    .filter(|c| !self.exclude_chars.contains(*c))
                    .collect::<Vec<char>>()
            })
            .filter(|class| !class.is_empty())
            .collect()
    }
}

/// Generate a password satisfying `policy`.
///
/// One character is drawn from each surviving class, the rest uniformly
/// from their union, and the result is shuffled so the guaranteed picks
/// sit at unpredictable positions. When `length` is below the class
/// count, each character comes from a different, randomly chosen class.
pub fn generate(policy: &GeneratorPolicy) -> Result<String> {
    if policy.length < 1 {
        return Err(PassVaultError::InvalidPolicy(
            "length must be at least 1".into(),
        ));
    }

    let classes = policy.classes();
    if classes.is_empty() {
        return Err(PassVaultError::InvalidPolicy(
            "every character is excluded".into(),
        ));
    }

    let mut rng = OsRng.unwrap_err();
    let pool: Vec<char> = classes.iter().flatten().copied().collect();

    // Too short for every class: the guaranteed picks go to a random subset.
    let mut guaranteed: Vec<&Vec<char>> = classes.iter().collect();
    guaranteed.shuffle(&mut rng);
    guaranteed.truncate(policy.length);

    let mut chars: Vec<char> = Vec::with_capacity(policy.length);
    for class in guaranteed {
        chars.push(class[rng.random_range(0..class.len())]);
    }
    while chars.len() < policy.length {
        chars.push(pool[rng.random_range(0..pool.len())]);
    }
    chars.shuffle(&mut rng);

    let password: String = chars.iter().collect();
    chars.zeroize();
    Ok(password)
}

/// Generate a passphrase of `word_count` words from the built-in list,
/// joined by `separator`.
pub fn generate_passphrase(word_count: usize, separator: &str) -> Result<String> {
    if word_count < 1 {
        return Err(PassVaultError::InvalidPolicy(
            "word count must be at least 1".into(),
        ));
    }

    let mut rng = OsRng.unwrap_err();
    let words: Vec<&str> = (0..word_count)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect();
    Ok(words.join(separator))
}

//! `passvault passphrase` — print a random word-based passphrase.

use crate::cli::output;
use crate::errors::Result;
use crate::generator;
use crate::strength;

/// Execute the `passphrase` command.
pub fn execute(words: usize, separator: &str) -> Result<()> {
    let phrase = generator::generate_passphrase(words, separator)?;
    println!("{phrase}");
    output::strength(&strength::estimate(&phrase));
    Ok(())
}

//! `passvault generate` — print a random password and its strength.

use crate::cli::output;
use crate::cli::load_settings;
use crate::errors::Result;
use crate::generator::{self, GeneratorPolicy};
use crate::strength;

/// Command-line overrides on top of the configured generator policy.
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub exclude: Option<String>,
}

impl GenerateArgs {
    /// Apply the overrides to a base policy.
    pub fn apply(self, base: GeneratorPolicy) -> GeneratorPolicy {
        GeneratorPolicy {
            length: self.length.unwrap_or(base.length),
            use_uppercase: base.use_uppercase && !self.no_uppercase,
            use_numbers: base.use_numbers && !self.no_numbers,
            use_symbols: base.use_symbols && !self.no_symbols,
            exclude_chars: self.exclude.unwrap_or(base.exclude_chars),
        }
    }
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let settings = load_settings()?;
    let policy = args.apply(settings.generator_policy());

    let password = generator::generate(&policy)?;

    // Password on stdout alone so it can be piped; the rating goes after.
    println!("{password}");
    output::strength(&strength::estimate(&password));

    Ok(())
}

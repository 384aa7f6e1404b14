//! Password strength estimation.
//!
//! The estimate is `sum(bits per character)`, where a fresh character
//! is worth `log2(alphabet)` and the alphabet is the union of the
//! character classes actually observed. Characters that repeat their
//! predecessor, or continue a +1/-1 run such as `abc` or `321`, are worth
//! a single bit. The bit total is then mapped to a 0..=4 score.
//!
//! Each character contributes a non-negative amount and the caps only
//! relax as the password grows, so appending characters within the same
//! classes never lowers the score.

/// Size of each character class.
const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
/// Printable ASCII punctuation plus space; anything else counts here too.
const SYMBOL_SIZE: u32 = 33;

/// Bits credited to a predictable character.
const PATTERN_BITS: f64 = 1.0;

/// Passwords shorter than this score at most 1.
pub const MIN_USABLE_LEN: usize = 8;
const SHORT_CAP: u8 = 1;

/// Upper bounds (exclusive) of the bit ranges for scores 0 to 3.
const THRESHOLDS: [f64; 4] = [28.0, 36.0, 60.0, 128.0];

/// Detailed result of a strength check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthEstimate {
    /// Estimated entropy after pattern penalties.
    pub bits: f64,
    /// Discrete score in `0..=4`.
    pub score: u8,
}

impl StrengthEstimate {
    /// Short human label for the score.
    pub fn label(&self) -> &'static str {
        match self.score {
            0 => "very weak",
            1 => "weak",
            2 => "fair",
            3 => "strong",
            _ => "very strong",
        }
    }
}

/// Score a password from 0 (trivial) to 4 (very strong).
pub fn score(password: &str) -> u8 {
    estimate(password).score
}

/// Estimate the entropy of a password and score it.
pub fn estimate(password: &str) -> StrengthEstimate {
    if password.is_empty() {
        return StrengthEstimate {
            bits: 0.0,
            score: 0,
        };
    }

    let chars: Vec<char> = password.chars().collect();
    let bits = entropy_bits(&chars);

    let mut score = bucket(bits);
    if chars.iter().all(|c| *c == chars[0]) {
        score = 0;
    }
    if chars.len() < MIN_USABLE_LEN {
        score = score.min(SHORT_CAP);
    }

    StrengthEstimate { bits, score }
}

fn alphabet_size(chars: &[char]) -> u32 {
    let mut size = 0;
    if chars.iter().any(|c| c.is_ascii_lowercase()) {
        size += LOWER_SIZE;
    }
    if chars.iter().any(|c| c.is_ascii_uppercase()) {
        size += UPPER_SIZE;
    }
    if chars.iter().any(|c| c.is_ascii_digit()) {
        size += DIGIT_SIZE;
    }
    if chars.iter().any(|c| !c.is_ascii_alphanumeric()) {
        size += SYMBOL_SIZE;
    }
    size
}

fn entropy_bits(chars: &[char]) -> f64 {
    let per_char = f64::from(alphabet_size(chars)).log2();

    (0..chars.len())
        .map(|i| {
            if is_predictable(chars, i) {
                PATTERN_BITS.min(per_char)
            } else {
                per_char
            }
        })
        .sum()
}

/// Whether `chars[i]` repeats its predecessor or continues a unit-step run.
fn is_predictable(chars: &[char], i: usize) -> bool {
    if i >= 1 && chars[i] == chars[i - 1] {
        return true;
    }
    if i >= 2 {
        let prev = step(chars[i - 2], chars[i - 1]);
        let cur = step(chars[i - 1], chars[i]);
        return prev == cur && cur.abs() == 1;
    }
    false
}

fn step(a: char, b: char) -> i64 {
    i64::from(u32::from(b)) - i64::from(u32::from(a))
}

fn bucket(bits: f64) -> u8 {
    THRESHOLDS
        .iter()
        .position(|limit| bits < *limit)
        .map_or(4, |idx| idx as u8)
}

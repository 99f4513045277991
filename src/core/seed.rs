//! Deal numbers.
//!
//! A deal is identified by a 7-digit decimal number with no leading zero
//! (1000000..=9999999). `Seed` parses and validates that form; the engine
//! itself accepts any `u64`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// Number of digits in a deal number.
pub const SEED_DIGITS: usize = 7;

const MIN_SEED: u64 = 1_000_000;
const MAX_SEED: u64 = 9_999_999;

/// A validated deal number.
///
/// Serialized as a bare number; deserializing applies the same range check
/// as parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Seed(u64);

impl Seed {
    /// Get the numeric value fed to the RNG.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SeedError::Empty);
        }
        if let Some(found) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(SeedError::NonDigit { found });
        }
        if s.len() != SEED_DIGITS {
            return Err(SeedError::WrongLength {
                expected: SEED_DIGITS,
                actual: s.len(),
            });
        }
        if s.starts_with('0') {
            return Err(SeedError::LeadingZero);
        }

        let value = s
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
        Ok(Self(value))
    }
}

impl TryFrom<u64> for Seed {
    type Error = SeedError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if !(MIN_SEED..=MAX_SEED).contains(&value) {
            return Err(SeedError::OutOfRange {
                value,
                min: MIN_SEED,
                max: MAX_SEED,
            });
        }
        Ok(Self(value))
    }
}

impl From<Seed> for u64 {
    fn from(seed: Seed) -> u64 {
        seed.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

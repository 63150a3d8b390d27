//! Puzzle seeds.
//!
//! A [`PuzzleSeed`] is 32 bytes of RNG state, written as 64 lowercase hex
//! characters. Every generated puzzle records the seed it was produced
//! from, so any board can be regenerated exactly.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// Seed for deterministic puzzle generation.
///
/// # Examples
///
/// ```
/// use griddler_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
///
/// // A phrase always derives the same seed.
/// assert_eq!(
///     PuzzleSeed::from_phrase("daily #42"),
///     PuzzleSeed::from_phrase("daily #42"),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; Self::LEN]);

impl PuzzleSeed {
    /// Seed length in bytes.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0; Self::LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a text phrase via SHA-256.
    ///
    /// Useful for human-shareable boards ("daily #42") without handing out
    /// raw hex.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(self) -> [u8; Self::LEN] {
        self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 hex characters.
    #[display("seed must be {expected} hex characters, got {len}")]
    InvalidLength {
        /// Expected character count.
        expected: usize,
        /// Actual character count.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex character {ch:?}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expected = Self::LEN * 2;
        if s.chars().count() != expected {
            return Err(ParseSeedError::InvalidLength {
                expected,
                len: s.chars().count(),
            });
        }

        let mut bytes = [0; Self::LEN];
        for (i, ch) in s.chars().enumerate() {
            bytes[i / 2] = bytes[i / 2] * 16 + hex_value(ch)?;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(ch: char) -> Result<u8, ParseSeedError> {
    let digit = ch
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidHexDigit { ch })?;
    #[expect(clippy::cast_possible_truncation)]
    let value = digit as u8;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.bytes()[0], 0xc1);
        assert_eq!(seed.bytes()[31], 0xf1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength {
                expected: 64,
                len: 3,
            })
        );
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidHexDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let seed: PuzzleSeed = HEX.to_uppercase().parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
    }

    #[test]
    fn test_phrase_derivation_is_stable() {
        let a = PuzzleSeed::from_phrase("daily #42");
        let b = PuzzleSeed::from_phrase("daily #42");
        let c = PuzzleSeed::from_phrase("daily #43");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        // Not a randomness test, just a sanity check that we are not handing
        // out a constant.
        assert_ne!(PuzzleSeed::from_entropy(), PuzzleSeed::from_entropy());
    }
}

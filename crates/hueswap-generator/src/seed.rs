use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits, so a puzzle can be
/// reproduced from its printed seed.
///
/// # Examples
///
/// ```
/// use hueswap_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
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

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The text did not contain exactly 64 characters.
    #[display("seed must be 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The text contained a non-hex character.
    #[display("seed contains a non-hex character")]
    InvalidDigit,
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = hex_value(pair[0]).ok_or(PuzzleSeedParseError::InvalidDigit)?;
            let lo = hex_value(pair[1]).ok_or(PuzzleSeedParseError::InvalidDigit)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

impl From<PuzzleSeed> for String {
    fn from(seed: PuzzleSeed) -> Self {
        seed.to_string()
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(String::from(seed), SEED);

        let upper: PuzzleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidLength { len: 4 })
        );
        let bad = format!("{}zz", &SEED[..62]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidDigit)
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let a: [u64; 4] = seed.rng().random();
        let b: [u64; 4] = seed.rng().random();
        assert_eq!(a, b);
    }
}

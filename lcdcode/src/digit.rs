//! Fixed segment patterns for the decimal digits.

use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;

/// An 8-bit segment pattern, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPattern(pub u8);

/// Number of bits (and pixels) one digit occupies.
pub const BITS_PER_DIGIT: usize = 8;

const DIGIT_PATTERNS: [BitPattern; 10] = [
    BitPattern(0b0111_0111), // 0
    BitPattern(0b0100_0010), // 1
    BitPattern(0b1011_0101), // 2
    BitPattern(0b1101_0110), // 3
    BitPattern(0b1100_0011), // 4
    BitPattern(0b1101_0101), // 5
    BitPattern(0b1111_0101), // 6
    BitPattern(0b0100_0110), // 7
    BitPattern(0b1111_0111), // 8
    BitPattern(0b1101_0111), // 9
];

/// Look up the segment pattern for a decimal digit.
pub fn encode(digit: u8) -> Result<BitPattern, EncodeError> {
    DIGIT_PATTERNS
        .get(digit as usize)
        .copied()
        .ok_or(EncodeError::UnsupportedDigit(digit))
}

impl BitPattern {
    /// Bits in display order, leftmost first.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..BITS_PER_DIGIT).map(move |i| (self.0 >> (BITS_PER_DIGIT - 1 - i)) & 1 == 1)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

impl FromStr for BitPattern {
    type Err = InvalidBitPattern;

    /// Parse an 8-character string of `0` and `1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != BITS_PER_DIGIT || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(InvalidBitPattern(s.to_string()));
        }
        u8::from_str_radix(s, 2)
            .map(BitPattern)
            .map_err(|_| InvalidBitPattern(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("bit pattern {0:?} is not 8 characters of '0'/'1'")]
pub struct InvalidBitPattern(pub String);

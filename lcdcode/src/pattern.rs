//! Assembly of checksum and identifier digit patterns into one bit string.

use std::collections::BTreeMap;

use crate::checksum::{Checksum, CHECKSUM_LENGTH};
use crate::digit::{self, BitPattern, BITS_PER_DIGIT};
use crate::error::EncodeError;
use crate::identifier::{Identifier, ID_LENGTH};

/// Number of digit positions in an assembled pattern.
pub const POSITIONS: usize = CHECKSUM_LENGTH + ID_LENGTH;

/// Length in characters of an assembled pattern.
pub const PATTERN_LENGTH: usize = POSITIONS * BITS_PER_DIGIT;

/// Digit patterns keyed by 1-based display position.
///
/// Positions 1-2 hold the checksum digits, 3-6 the identifier digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingTable {
    entries: BTreeMap<usize, BitPattern>,
}

impl EncodingTable {
    pub fn new() -> EncodingTable {
        EncodingTable::default()
    }

    /// Encode checksum then identifier digits into positions 1..=6.
    pub fn assemble(checksum: &Checksum, id: &Identifier) -> Result<EncodingTable, EncodeError> {
        let mut table = EncodingTable::new();
        let digits = checksum.digits().into_iter().chain(id.digits());
        for (i, d) in digits.enumerate() {
            table.insert(i + 1, digit::encode(d)?);
        }
        Ok(table)
    }

    pub fn insert(&mut self, position: usize, pattern: BitPattern) -> Option<BitPattern> {
        self.entries.insert(position, pattern)
    }

    pub fn get(&self, position: usize) -> Option<BitPattern> {
        self.entries.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenate positions 1..=6 in ascending order into a 48-character string.
    ///
    /// Fails if any position is absent. Entries outside 1..=6 are ignored.
    pub fn pattern(&self) -> Result<String, EncodeError> {
        let mut out = String::with_capacity(PATTERN_LENGTH);
        for position in 1..=POSITIONS {
            let bits = self.get(position).ok_or(EncodeError::MissingPosition(position))?;
            out.push_str(&bits.to_string());
        }
        Ok(out)
    }
}

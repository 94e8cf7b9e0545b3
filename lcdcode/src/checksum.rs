use crate::identifier::Identifier;

/// Modulus of the checksum formula.
pub const MODULUS: u32 = 97;

/// Number of checksum digits shown ahead of the identifier.
pub const CHECKSUM_LENGTH: usize = 2;

/// Two-digit checksum derived from an [`Identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    value: u32,
    digits: [u8; CHECKSUM_LENGTH],
}

/// Raw checksum value: `(d0 + 10*d1 + 100*d2 + 1000*d3) mod 97`.
///
/// The first digit carries the lowest weight, so the formula reads the
/// identifier back to front.
pub fn compute(id: &Identifier) -> u32 {
    let [d0, d1, d2, d3] = id.digits().map(u32::from);
    (d0 + 10 * d1 + 100 * d2 + 1000 * d3) % MODULUS
}

impl Checksum {
    pub fn for_identifier(id: &Identifier) -> Checksum {
        Checksum::split(compute(id))
    }

    /// Split a checksum value into display digits, or `None` if it is not
    /// below [`MODULUS`].
    pub fn from_value(value: u32) -> Option<Checksum> {
        (value < MODULUS).then(|| Checksum::split(value))
    }

    /// Splits on the width of the decimal text: two characters are used as
    /// tens and units, a single character gets a leading `0`.
    fn split(value: u32) -> Checksum {
        let text = value.to_string();
        let digits = match text.as_bytes() {
            [tens, units] => [tens - b'0', units - b'0'],
            _ => [0, (value % 10) as u8],
        };
        Checksum { value, digits }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn digits(&self) -> [u8; CHECKSUM_LENGTH] {
        self.digits
    }
}

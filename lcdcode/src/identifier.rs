use std::fmt;

use crate::error::{EncodeError, ParseError};

/// Number of digits in an asset identifier.
pub const ID_LENGTH: usize = 4;

/// A 4-digit asset identifier, digits in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier([u8; ID_LENGTH]);

impl Identifier {
    /// Build an identifier from already-split digits.
    pub fn from_digits(digits: [u8; ID_LENGTH]) -> Result<Identifier, EncodeError> {
        if let Some(&d) = digits.iter().find(|&&d| d > 9) {
            return Err(EncodeError::UnsupportedDigit(d));
        }
        Ok(Identifier(digits))
    }

    /// Parse one input row. `row` is 1-based and only used for error reporting.
    ///
    /// The length check counts characters and runs before any digit is
    /// inspected, so `"12b"` is a length error rather than a parse error.
    pub fn parse(line: &str, row: usize) -> Result<Identifier, ParseError> {
        let len = line.chars().count();
        if len != ID_LENGTH {
            return Err(ParseError::RowLength { row, len });
        }

        let mut digits = [0u8; ID_LENGTH];
        for (slot, c) in digits.iter_mut().zip(line.chars()) {
            *slot = c.to_digit(10).ok_or_else(|| ParseError::DigitParse {
                row,
                token: c.to_string(),
            })? as u8;
        }
        Ok(Identifier(digits))
    }

    pub fn digits(&self) -> [u8; ID_LENGTH] {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_row() {
        let id = Identifier::parse("1337", 1).unwrap();
        assert_eq!(id.digits(), [1, 3, 3, 7]);
        assert_eq!(id.to_string(), "1337");
    }

    #[test]
    fn leading_zeros_survive_display() {
        let id = Identifier::parse("0042", 1).unwrap();
        assert_eq!(id.to_string(), "0042");
    }

    #[test]
    fn short_row_is_length_error() {
        assert_eq!(
            Identifier::parse("133", 3),
            Err(ParseError::RowLength { row: 3, len: 3 })
        );
    }

    #[test]
    fn long_row_is_length_error() {
        assert_eq!(
            Identifier::parse("13370", 1),
            Err(ParseError::RowLength { row: 1, len: 5 })
        );
        assert_eq!(
            Identifier::parse("", 2),
            Err(ParseError::RowLength { row: 2, len: 0 })
        );
    }

    #[test]
    fn trailing_whitespace_counts_toward_length() {
        assert!(matches!(
            Identifier::parse("1337 ", 1),
            Err(ParseError::RowLength { len: 5, .. })
        ));
    }

    #[test]
    fn non_digit_names_token() {
        let err = Identifier::parse("26b4", 2).unwrap_err();
        assert_eq!(
            err,
            ParseError::DigitParse {
                row: 2,
                token: "b".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid digit \"b\" on row 2");
    }

    #[test]
    fn sign_characters_are_not_digits() {
        assert!(matches!(
            Identifier::parse("-123", 1),
            Err(ParseError::DigitParse { .. })
        ));
    }

    #[test]
    fn multibyte_characters_count_once() {
        // Four characters, one of them non-ASCII.
        assert!(matches!(
            Identifier::parse("12é4", 1),
            Err(ParseError::DigitParse { .. })
        ));
    }

    #[test]
    fn from_digits_rejects_out_of_range() {
        assert_eq!(
            Identifier::from_digits([1, 2, 12, 4]),
            Err(EncodeError::UnsupportedDigit(12))
        );
        assert!(Identifier::from_digits([9, 9, 9, 9]).is_ok());
    }
}

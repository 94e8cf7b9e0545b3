use std::io;

use thiserror::Error;

use crate::identifier::Identifier;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("no encoding for digit {0}")]
    UnsupportedDigit(u8),

    #[error("encoding table has no entry for position {0}")]
    MissingPosition(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("incorrect asset id length {len} found on row {row}")]
    RowLength { row: usize, len: usize },

    #[error("invalid digit {token:?} on row {row}")]
    DigitParse { row: usize, token: String },
}

/// Failure of a whole conversion run. Every variant is terminal.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("reading row {row}: {source}")]
    Read {
        row: usize,
        #[source]
        source: io::Error,
    },

    #[error("persisting image for asset {id}: {source}")]
    Persist {
        id: Identifier,
        #[source]
        source: io::Error,
    },
}

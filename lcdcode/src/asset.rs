use crate::checksum::Checksum;
use crate::error::EncodeError;
use crate::identifier::Identifier;
use crate::pattern::EncodingTable;
use crate::render::{self, PixelRow};

/// One input row with its derived checksum and digit encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: Identifier,
    pub checksum: Checksum,
    pub encoding: EncodingTable,
}

impl Asset {
    /// Compute the checksum and encode all six display digits.
    pub fn new(id: Identifier) -> Result<Asset, EncodeError> {
        let checksum = Checksum::for_identifier(&id);
        let encoding = EncodingTable::assemble(&checksum, &id)?;
        Ok(Asset {
            id,
            checksum,
            encoding,
        })
    }

    /// The 48-character display pattern.
    pub fn pattern(&self) -> Result<String, EncodeError> {
        self.encoding.pattern()
    }

    pub fn render(&self) -> Result<PixelRow, EncodeError> {
        Ok(render::render(&self.pattern()?))
    }
}

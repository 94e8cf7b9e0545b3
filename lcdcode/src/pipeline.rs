//! Sequential conversion of input rows into rendered display images.
//!
//! Rows are pulled from a [`RowSource`], converted one at a time, and each
//! result is handed to an [`ImageSink`]. The first error of any kind aborts
//! the whole run; rows after it are never read and no further images are
//! persisted.

use std::collections::BTreeMap;
use std::io;

use tracing::{debug, info};

use crate::asset::Asset;
use crate::error::PipelineError;
use crate::identifier::Identifier;
use crate::render::PixelRow;

/// Supplier of raw input lines, in order.
pub trait RowSource {
    /// The next line without its terminator, or `None` at end of input.
    fn next_row(&mut self) -> Option<io::Result<String>>;
}

impl<I> RowSource for I
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_row(&mut self) -> Option<io::Result<String>> {
        self.next()
    }
}

/// Destination for rendered images, keyed by identifier.
pub trait ImageSink {
    fn persist(&mut self, id: &Identifier, row: &PixelRow) -> io::Result<()>;
}

/// Sink that keeps images in memory. Later rows with the same identifier
/// replace earlier ones, as a file sink would overwrite.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub images: BTreeMap<String, PixelRow>,
}

impl ImageSink for MemorySink {
    fn persist(&mut self, id: &Identifier, row: &PixelRow) -> io::Result<()> {
        self.images.insert(id.to_string(), row.clone());
        Ok(())
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
}

/// Parse, encode and render a single row. `row` is 1-based.
pub fn convert_row(line: &str, row: usize) -> Result<(Asset, PixelRow), PipelineError> {
    let id = Identifier::parse(line, row)?;
    let asset = Asset::new(id)?;
    let image = asset.render()?;
    Ok((asset, image))
}

/// Convert every row of `source` and persist each image to `sink`.
pub fn run<R, S>(source: &mut R, sink: &mut S) -> Result<RunSummary, PipelineError>
where
    R: RowSource + ?Sized,
    S: ImageSink + ?Sized,
{
    let mut row = 0;
    while let Some(line) = source.next_row() {
        row += 1;
        let line = line.map_err(|source| PipelineError::Read { row, source })?;

        let (asset, image) = convert_row(&line, row)?;
        debug!(
            row,
            id = %asset.id,
            checksum = asset.checksum.value(),
            "encoded asset"
        );

        sink.persist(&asset.id, &image)
            .map_err(|source| PipelineError::Persist {
                id: asset.id,
                source,
            })?;
    }

    info!(rows = row, "Done");
    Ok(RunSummary { rows: row })
}

//! Line-oriented input file reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};

/// Open an input list as a row source. Line terminators (`\n` or `\r\n`)
/// are stripped; no other trimming is applied.
pub fn open_rows(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("opening input {}", path.display()))?;
    Ok(BufReader::new(file).lines())
}

//! PNG output for rendered display rows.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lcdcode::identifier::Identifier;
use lcdcode::pipeline::ImageSink;
use lcdcode::render::PixelRow;

/// Image sink writing `<id>.png` files into one directory.
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Create the output directory (and parents) if absent.
    pub fn create(dir: &Path) -> Result<PngDirSink> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory '{}'", dir.display()))?;
        Ok(PngDirSink {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, id: &Identifier) -> PathBuf {
        self.dir.join(format!("{id}.png"))
    }
}

impl ImageSink for PngDirSink {
    fn persist(&mut self, id: &Identifier, row: &PixelRow) -> io::Result<()> {
        let path = self.path_for(id);
        let with_path = |e: io::Error| io::Error::new(e.kind(), format!("{}: {e}", path.display()));

        let file = File::create(&path).map_err(with_path)?;
        let mut w = BufWriter::new(file);
        write_row_png(&mut w, row).map_err(with_path)?;
        w.flush().map_err(with_path)
    }
}

/// Encode a row as an 8-bit RGBA PNG.
pub fn write_row_png<W: Write>(w: W, row: &PixelRow) -> io::Result<()> {
    let mut encoder = png::Encoder::new(w, row.width() as u32, row.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().map_err(io::Error::other)?;
    writer
        .write_image_data(&row.to_rgba())
        .map_err(io::Error::other)?;
    writer.finish().map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcdcode::pipeline;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn png_is_256x1_rgba() {
        let (_, row) = pipeline::convert_row("1337", 1).unwrap();
        let mut bytes = Vec::new();
        write_row_png(&mut bytes, &row).unwrap();

        let (info, data) = decode(&bytes);
        assert_eq!((info.width, info.height), (256, 1));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(data, row.to_rgba());
    }

    #[test]
    fn encoding_is_deterministic() {
        let (_, row) = pipeline::convert_row("2674", 1).unwrap();
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_row_png(&mut a, &row).unwrap();
        write_row_png(&mut b, &row).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sink_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let mut sink = PngDirSink::create(&dir).unwrap();

        let (asset, row) = pipeline::convert_row("0042", 1).unwrap();
        sink.persist(&asset.id, &row).unwrap();
        assert!(dir.join("0042.png").is_file());
    }
}

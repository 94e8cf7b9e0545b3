use crate::pattern::PATTERN_LENGTH;
use crate::types::Pixel;

/// Output image width in pixels.
pub const WIDTH: usize = 256;
/// Output image height in pixels.
pub const HEIGHT: usize = 1;
/// First pixel of the digit zone. Pixels before it are reserved.
pub const OFFSET: usize = 8;
/// One past the last pixel of the digit zone. Pixels from here on are reserved.
pub const RESERVED_FROM: usize = OFFSET + PATTERN_LENGTH;

/// A rendered single-row display image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRow {
    pixels: [Pixel; WIDTH],
}

impl PixelRow {
    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// # Panics
    ///
    /// Panics if `x >= WIDTH`.
    pub fn pixel(&self, x: usize) -> Pixel {
        self.pixels[x]
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Convert to RGBA pixel data (4 bytes per pixel, 1024 bytes total).
    ///
    /// Mark = (0, 0, 0, 255), Blank = (255, 255, 255, 255).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.rgba()).collect()
    }
}

/// Render an assembled pattern onto a 256x1 row.
///
/// `pattern` must be the 48-character output of
/// [`EncodingTable::pattern`](crate::pattern::EncodingTable::pattern); its
/// length is not checked here. Every character other than `1` renders blank.
pub fn render(pattern: &str) -> PixelRow {
    debug_assert_eq!(pattern.len(), PATTERN_LENGTH);

    let mut pixels = [Pixel::Blank; WIDTH];
    for (px, bit) in pixels[OFFSET..RESERVED_FROM].iter_mut().zip(pattern.bytes()) {
        if bit == b'1' {
            *px = Pixel::Mark;
        }
    }
    PixelRow { pixels }
}

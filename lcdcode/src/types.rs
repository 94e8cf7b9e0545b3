/// A single display pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    /// Unlit segment or reserved cell, rendered opaque white.
    Blank,
    /// Lit segment, rendered opaque black.
    Mark,
}

impl Pixel {
    /// RGBA sample for this pixel. Always fully opaque.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Pixel::Blank => [255, 255, 255, 255],
            Pixel::Mark => [0, 0, 0, 255],
        }
    }
}

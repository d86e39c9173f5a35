use image::Rgba;

/// A pixel in the two-valued monochrome domain.
///
/// Monochrome-mode keys and ciphertexts carry exactly one bit per pixel.
/// `Black` is the set ("1") state of that bit, which is what makes the
/// equality rule in the transform an XOR over this domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mono {
    /// Pure black, the set state.
    Black,
    /// Pure white, the cleared state.
    White,
}

impl Mono {
    /// Reduces an arbitrary color to a monochrome tag via a luminance
    /// threshold.
    ///
    /// Channels are widened to 16-bit (`c * 257`, so 0xff maps to 0xffff)
    /// and combined with the standard perceptual luma weights; the `+ 500`
    /// term rounds the integer division to nearest. Luma below the 16-bit
    /// midpoint is `Black`, everything else `White`. The reduction is total
    /// and deterministic; the alpha channel is ignored.
    #[must_use]
    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        let r = u32::from(pixel[0]) * 257;
        let g = u32::from(pixel[1]) * 257;
        let b = u32::from(pixel[2]) * 257;
        let y = (299 * r + 587 * g + 114 * b + 500) / 1000;
        if y < 0x8000 { Self::Black } else { Self::White }
    }

    /// Expands the tag back to an opaque pure-black or pure-white pixel.
    #[must_use]
    pub fn to_rgba(self) -> Rgba<u8> {
        match self {
            Self::Black => Rgba([0, 0, 0, 0xff]),
            Self::White => Rgba([0xff, 0xff, 0xff, 0xff]),
        }
    }
}

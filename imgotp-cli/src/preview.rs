//! Braille dot-matrix rendering of images for the `--verbose` flag.

use image::{DynamicImage, imageops::FilterType};
use imgotp_core::Mono;

const PREVIEW_WIDTH: u32 = 128;

// Bit offsets of the eight dots in a 2x4 braille cell, indexed [dx][dy]
// per the U+2800 block layout.
const DOT_BITS: [[u32; 4]; 2] = [[0, 1, 2, 6], [3, 4, 5, 7]];

/// Prints a thresholded preview of `img` to stdout, downscaled to at most
/// 128 columns of dots, dark pixels rendered as raised dots.
pub(crate) fn print(img: &DynamicImage) {
    let scaled = if img.width() > PREVIEW_WIDTH {
        img.resize(PREVIEW_WIDTH, u32::MAX, FilterType::Lanczos3)
    } else {
        img.clone()
    };
    let pixels = scaled.to_rgba8();

    println!();
    for cell_y in (0..pixels.height()).step_by(4) {
        let mut line = String::new();
        for cell_x in (0..pixels.width()).step_by(2) {
            let mut mask = 0u32;
            for (dx, bits) in DOT_BITS.iter().enumerate() {
                for (dy, &bit) in bits.iter().enumerate() {
                    let x = cell_x + dx as u32;
                    let y = cell_y + dy as u32;
                    if x < pixels.width()
                        && y < pixels.height()
                        && Mono::from_rgba(*pixels.get_pixel(x, y)) == Mono::Black
                    {
                        mask |= 1 << bit;
                    }
                }
            }
            line.push(char::from_u32(0x2800 + mask).unwrap_or(' '));
        }
        println!("{line}");
    }
}

// File:    keygen.rs
//
// Description: Provides functionality for generating random one-time pad key images.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use image::{Rgba, RgbaImage};
use log::debug;
use rand::{TryRngCore, rngs::OsRng};

use crate::crypto::ColorMode;
use crate::error::{Error, Result};
use crate::mono::Mono;

/// Generates a new square one-time pad key image of the given size.
///
/// Every channel byte is drawn from the operating system's cryptographically
/// secure random source. In [`ColorMode::Monochrome`] each pixel consumes one
/// random byte and only its least significant bit is kept (0 maps to white,
/// 1 to black); in [`ColorMode::Rgb`] each pixel consumes three random bytes
/// assigned directly to the red, green and blue channels. Alpha is always
/// fully opaque.
///
/// The returned image is not persisted anywhere; saving it is the caller's
/// responsibility.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] when `size` is zero, and
/// [`Error::RandomSource`] when the OS random source fails. A random source
/// failure is fatal — this function never falls back to a weaker generator.
pub fn generate_key(size: u32, mode: ColorMode) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::InvalidDimension {
            width: size,
            height: size,
        });
    }

    let pixels = (size as usize) * (size as usize);
    let bytes_per_pixel = match mode {
        ColorMode::Monochrome => 1,
        ColorMode::Rgb => 3,
    };

    let mut rng = OsRng;
    let mut buffer = vec![0u8; pixels * bytes_per_pixel];
    // Use the failable `try_fill_bytes`; a weak fallback is never acceptable here.
    rng.try_fill_bytes(&mut buffer)
        .map_err(Error::RandomSource)?;

    debug!("generating {size}x{size} key, {mode:?}, {} random bytes", buffer.len());

    let mut key = RgbaImage::new(size, size);
    match mode {
        ColorMode::Monochrome => {
            for (pixel, byte) in key.pixels_mut().zip(buffer) {
                let tag = if byte & 1 == 0 { Mono::White } else { Mono::Black };
                *pixel = tag.to_rgba();
            }
        }
        ColorMode::Rgb => {
            for (pixel, rgb) in key.pixels_mut().zip(buffer.chunks_exact(3)) {
                *pixel = Rgba([rgb[0], rgb[1], rgb[2], 0xff]);
            }
        }
    }

    Ok(key)
}

// File:    error.rs
//
// Description: Typed errors for key generation and the pixel transform.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for imgotp-core.
//!
//! The library performs no local recovery: every error aborts the requested
//! operation and is surfaced to the caller as a typed failure. There is no
//! partial output and no retry. A failure of the secure random source in
//! particular is fatal — it is never degraded to a weaker source.

use thiserror::Error;

/// Result type alias for imgotp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during key generation or the pixel transform.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested or supplied image geometry has zero area.
    ///
    /// Returned for `generate_key` with a zero size and for a transform
    /// whose key image has a zero-area bounds.
    #[error("invalid image dimensions {width}x{height}: a positive area is required")]
    InvalidDimension {
        /// Requested or supplied width in pixels.
        width: u32,
        /// Requested or supplied height in pixels.
        height: u32,
    },

    /// The operating system's secure random source failed.
    ///
    /// Key secrecy is the entire basis of the scheme, so this is fatal;
    /// there is no fallback to a non-cryptographic generator.
    #[error("secure random source failed: {0}")]
    RandomSource(#[source] rand::rand_core::OsError),

    /// The image codec failed to decode an input image.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The image codec failed to encode an output image.
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

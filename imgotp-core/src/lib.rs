// File:    lib.rs
//
// Description: The main library crate for imgotp-core, providing key generation and the pixel transform engine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Image OTP Core Library
//!
//! This library provides the core functionality for image-based one-time pad
//! (OTP) encryption: random key image generation and the per-pixel transform
//! that both encrypts and decrypts.
//!
//! The transform XORs a source image against a key image (`c = m ⊕ k`).
//! Because XOR is its own inverse, applying the transform a second time with
//! the same key recovers the original (`m = c ⊕ k`) — there is no separate
//! decryption algorithm. Security rests entirely on the key being generated
//! from a cryptographically secure random source and never reused.

/// The per-pixel transform used for both encryption and decryption.
pub mod crypto;
/// Typed errors surfaced by the library.
pub mod error;
/// Generation of random one-time pad key images.
pub mod keygen;
/// The two-valued monochrome pixel domain and luminance reduction.
pub mod mono;

pub use crypto::{ColorMode, transform};
pub use error::{Error, Result};
pub use keygen::generate_key;
pub use mono::Mono;

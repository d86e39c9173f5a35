// File:    main.rs
//
// Description: Command-line interface for encrypting and decrypting images with OTP key images.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A command-line interface for image-based OTP encryption.

use clap::{Parser, Subcommand};
use image::{DynamicImage, RgbaImage};
use imgotp_core::{ColorMode, Error, transform};
use log::{error, info};
use std::path::{Path, PathBuf};

mod preview;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a 256x256 black and white key\nimgotp key-gen --out otp-key.png\n\n# Encrypt a picture with it\nimgotp enc --file secret.png --key otp-key.png --out enc.png\n\n# Decrypt is the same operation with the same key\nimgotp dec --file enc.png --key otp-key.png --out dec.png\n\n# Demonstrate the two-time pad attack by XORing two ciphertexts\nimgotp xor -a enc1.png -b enc2.png --out leak.png"
)]
struct Cli {
    /// Use RGB mode instead of black and white
    #[arg(short = 'c', long, global = true)]
    rgb: bool,

    /// Print the images involved to the terminal
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new OTP key image
    KeyGen {
        /// Path to store the generated otp key
        #[arg(short, long, default_value = "otp-key.png")]
        out: PathBuf,

        /// Width (same as height) of the generated otp key image
        #[arg(short, long, default_value_t = 256)]
        width: u32,
    },
    /// Encrypt an image using an OTP key image
    Enc {
        /// Path of the image to encrypt
        #[arg(short, long)]
        file: PathBuf,

        /// Path of the key image to use for encryption
        #[arg(short, long)]
        key: PathBuf,

        /// Path to save the encrypted image
        #[arg(short, long, default_value = "enc.png")]
        out: PathBuf,
    },
    /// Decrypt an image using an OTP key image
    Dec {
        /// Path of the image to decrypt
        #[arg(short, long)]
        file: PathBuf,

        /// Path of the key image to use for decryption
        #[arg(short, long)]
        key: PathBuf,

        /// Path to save the decrypted image
        #[arg(short, long, default_value = "dec.png")]
        out: PathBuf,
    },
    /// XOR two images together
    Xor {
        /// Path of the first image
        #[arg(short = 'a', long)]
        img1: PathBuf,

        /// Path of the second image
        #[arg(short = 'b', long)]
        img2: PathBuf,

        /// Path to save the XORed image
        #[arg(short, long, default_value = "xor.png")]
        out: PathBuf,
    },
}

fn open_image(path: &Path) -> Result<DynamicImage, Error> {
    image::open(path).map_err(Error::Decode)
}

fn save_image(path: &Path, img: &RgbaImage) -> Result<(), Error> {
    img.save(path).map_err(Error::Encode)
}

fn run_key_gen(out: &Path, width: u32, mode: ColorMode, verbose: bool) -> Result<(), Error> {
    info!("generating a {width}x{width} {mode:?} key");
    let key = imgotp_core::generate_key(width, mode)?;
    save_image(out, &key)?;
    if verbose {
        preview::print(&DynamicImage::ImageRgba8(key));
    }
    println!("otp key written to {}", out.display());
    Ok(())
}

fn run_transform(
    verb: &str,
    file: &Path,
    key_path: &Path,
    out: &Path,
    mode: ColorMode,
    verbose: bool,
) -> Result<(), Error> {
    let img = open_image(file)?;
    let key = open_image(key_path)?;

    info!(
        "{verb} '{}' with key '{}' in {mode:?} mode",
        file.display(),
        key_path.display()
    );
    let result = transform(&img, &key, mode)?;
    save_image(out, &result)?;

    if verbose {
        println!("{verb} {}", file.display());
        preview::print(&img);
        println!("with key {}", key_path.display());
        preview::print(&key);
        preview::print(&DynamicImage::ImageRgba8(result));
    }
    println!("file saved to {}", out.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mode = if cli.rgb {
        ColorMode::Rgb
    } else {
        ColorMode::Monochrome
    };

    let result = match &cli.command {
        Commands::KeyGen { out, width } => run_key_gen(out, *width, mode, cli.verbose),
        Commands::Enc { file, key, out } => {
            run_transform("encrypting", file, key, out, mode, cli.verbose)
        }
        Commands::Dec { file, key, out } => {
            run_transform("decrypting", file, key, out, mode, cli.verbose)
        }
        Commands::Xor { img1, img2, out } => {
            run_transform("XORing", img1, img2, out, mode, cli.verbose)
        }
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

#![allow(missing_docs)]
use imgotp_core::{ColorMode, Error, generate_key};

#[test]
fn test_keys_are_always_square() {
    for size in [1, 2, 256, 1024] {
        for mode in [ColorMode::Monochrome, ColorMode::Rgb] {
            let key = generate_key(size, mode).unwrap();
            assert_eq!(key.width(), size);
            assert_eq!(key.height(), size);
        }
    }
}

#[test]
fn test_zero_size_is_rejected() {
    let err = generate_key(0, ColorMode::Rgb).unwrap_err();
    assert!(matches!(err, Error::InvalidDimension { width: 0, height: 0 }));
}

#[test]
fn test_monochrome_key_pixels_are_pure() {
    let key = generate_key(64, ColorMode::Monochrome).unwrap();
    for pixel in key.pixels() {
        assert!(
            pixel.0 == [0, 0, 0, 0xff] || pixel.0 == [0xff, 0xff, 0xff, 0xff],
            "monochrome key pixel must be pure black or pure white, got {:?}",
            pixel.0
        );
    }
}

#[test]
fn test_rgb_key_is_opaque() {
    let key = generate_key(32, ColorMode::Rgb).unwrap();
    assert!(key.pixels().all(|p| p[3] == 0xff));
}

#[test]
fn test_monochrome_key_is_statistically_balanced() {
    // 65536 coin flips; the black fraction should sit well within
    // 0.5 +/- 0.03 (a deviation that large is a > 15 sigma event).
    let key = generate_key(256, ColorMode::Monochrome).unwrap();
    let black = key.pixels().filter(|p| p[0] == 0).count();
    let fraction = black as f64 / f64::from(256u32 * 256);
    assert!(
        (fraction - 0.5).abs() < 0.03,
        "black fraction {fraction} is implausibly unbalanced"
    );
}

#[test]
fn test_rgb_key_bytes_are_roughly_uniform() {
    // Mean of ~196k uniform bytes has a standard deviation of about 0.17,
    // so a mean outside 127.5 +/- 2.5 points at a broken source.
    let key = generate_key(256, ColorMode::Rgb).unwrap();
    let mut sum = 0u64;
    let mut count = 0u64;
    for pixel in key.pixels() {
        sum += u64::from(pixel[0]) + u64::from(pixel[1]) + u64::from(pixel[2]);
        count += 3;
    }
    let mean = sum as f64 / count as f64;
    assert!(
        (mean - 127.5).abs() < 2.5,
        "channel byte mean {mean} is implausibly skewed"
    );
}

//! File-level hide/reveal tests: the properties a caller of the public API
//! actually relies on, run against real PNG files in a temp directory.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use pixelveil::{hide, reveal, StegoError};

/// Write a deterministic noise carrier of the given size into `dir`.
fn make_carrier(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let v = (x * 7 + y * 11) as u8;
        Rgba([v, v.wrapping_add(101), v.wrapping_mul(5), 255])
    });
    img.save(&path).unwrap();
    path
}

#[test]
fn test_hide_then_reveal_round_trips() {
    let dir = TempDir::new().unwrap();
    let carrier = make_carrier(dir.path(), "carrier.png", 256, 256);
    let output = dir.path().join("encoded.png");

    hide(&carrier, "the cake is a lie", "swordfish", &output).unwrap();
    let message = reveal(&output, "swordfish").unwrap();

    assert_eq!(message, "the cake is a lie");
}

#[test]
fn test_unicode_message_round_trips() {
    let dir = TempDir::new().unwrap();
    let carrier = make_carrier(dir.path(), "carrier.png", 256, 256);
    let output = dir.path().join("encoded.png");
    let secret = "сообщение 秘密 — ¡hola! 🦀";

    hide(&carrier, secret, "pässwörd", &output).unwrap();

    assert_eq!(reveal(&output, "pässwörd").unwrap(), secret);
}

#[test]
fn test_wrong_password_never_decodes() {
    let dir = TempDir::new().unwrap();
    let carrier = make_carrier(dir.path(), "carrier.png", 256, 256);
    let output = dir.path().join("encoded.png");

    hide(&carrier, "top secret", "alpha", &output).unwrap();
    let result = reveal(&output, "bravo");

    assert!(matches!(result, Err(StegoError::Authentication)));
}

#[test]
fn test_small_image_fails_with_capacity_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    // 10x10 = 300 bits of capacity; a sealed token needs 800+
    let carrier = make_carrier(dir.path(), "tiny.png", 10, 10);
    let output = dir.path().join("encoded.png");

    let result = hide(&carrier, "hi", "pw", &output);

    assert!(matches!(result, Err(StegoError::Capacity { .. })));
    assert!(!output.exists(), "failed hide must not create the output");
}

#[test]
fn test_missing_source_is_not_found() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("encoded.png");

    let result = hide(&dir.path().join("nope.png"), "msg", "pw", &output);

    assert!(matches!(result, Err(StegoError::NotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_unsupported_source_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("carrier.webp");
    std::fs::write(&bogus, b"not really an image").unwrap();

    let result = reveal(&bogus, "pw");

    assert!(matches!(result, Err(StegoError::UnsupportedFormat(_))));
}

#[test]
fn test_reveal_from_untouched_image_reports_no_message() {
    let dir = TempDir::new().unwrap();
    let carrier = make_carrier(dir.path(), "clean.png", 128, 128);

    let result = reveal(&carrier, "pw");

    assert!(matches!(
        result,
        Err(StegoError::Format(_)) | Err(StegoError::Authentication)
    ));
}

#[test]
fn test_carrier_file_is_left_unmodified() {
    let dir = TempDir::new().unwrap();
    let carrier = make_carrier(dir.path(), "carrier.png", 128, 128);
    let before = std::fs::read(&carrier).unwrap();
    let output = dir.path().join("encoded.png");

    hide(&carrier, "copies only", "pw", &output).unwrap();

    assert_eq!(std::fs::read(&carrier).unwrap(), before);
}

#[test]
fn test_same_message_twice_produces_different_carriers() {
    let dir = TempDir::new().unwrap();
    let carrier = make_carrier(dir.path(), "carrier.png", 256, 256);
    let out1 = dir.path().join("one.png");
    let out2 = dir.path().join("two.png");

    hide(&carrier, "same words", "pw", &out1).unwrap();
    hide(&carrier, "same words", "pw", &out2).unwrap();

    // fresh nonce per seal, so the embedded tokens differ
    assert_ne!(std::fs::read(&out1).unwrap(), std::fs::read(&out2).unwrap());
    assert_eq!(reveal(&out1, "pw").unwrap(), "same words");
    assert_eq!(reveal(&out2, "pw").unwrap(), "same words");
}

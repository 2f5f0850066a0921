//! End-to-end hide and reveal.
//!
//! Wires the key derivation, token cipher and bit-plane codec together.
//! The path-level functions own load/save; the `_image` variants work on
//! decoded pixel buffers for callers that manage persistence themselves.
//! Output is written only after the embed has fully succeeded, so a failed
//! `hide` never creates or alters the destination file.

use std::path::Path;

use image::{DynamicImage, RgbaImage};
use log::{debug, info};

use crate::crypto::{derive_key, TokenCipher};
use crate::error::StegoError;
use crate::stego::{embed_payload, extract_payload};
use crate::validate::validate_image_source;

/// Encrypt `plaintext` under `password` and hide the resulting token in the
/// image at `image_path`, writing the carrier to `output_path`.
pub fn hide(
    image_path: &Path,
    plaintext: &str,
    password: &str,
    output_path: &Path,
) -> Result<(), StegoError> {
    validate_image_source(image_path)?;
    let image = image::open(image_path)?;
    let encoded = hide_in_image(&image, plaintext, password)?;
    encoded.save(output_path)?;
    info!(
        "hid {} plaintext bytes in {}",
        plaintext.len(),
        output_path.display()
    );
    Ok(())
}

/// Extract and decrypt the message hidden in the image at `image_path`.
pub fn reveal(image_path: &Path, password: &str) -> Result<String, StegoError> {
    validate_image_source(image_path)?;
    let image = image::open(image_path)?;
    let message = reveal_from_image(&image, password)?;
    info!("revealed {} bytes from {}", message.len(), image_path.display());
    Ok(message)
}

/// In-memory `hide`: seal the message and embed the token in a copy of the
/// image's pixels.
pub fn hide_in_image(
    image: &DynamicImage,
    plaintext: &str,
    password: &str,
) -> Result<RgbaImage, StegoError> {
    let key = derive_key(password);
    let cipher = TokenCipher::new(&key)?;
    let token = cipher.seal(plaintext.as_bytes())?;
    debug!("sealed token is {} bytes", token.len());

    let mut pixels = image.to_rgba8();
    embed_payload(&mut pixels, token.as_bytes())?;
    Ok(pixels)
}

/// In-memory `reveal`: extract the token from the image's pixels and open it.
pub fn reveal_from_image(image: &DynamicImage, password: &str) -> Result<String, StegoError> {
    let pixels = image.to_rgba8();
    let payload = extract_payload(&pixels);

    // A real token is pure base64 text; anything else is pixel noise.
    let token = String::from_utf8(payload)
        .map_err(|_| StegoError::Format("extracted bytes are not ASCII".into()))?;

    let key = derive_key(password);
    let cipher = TokenCipher::new(&key)?;
    let plaintext = cipher.open(&token)?;

    String::from_utf8(plaintext)
        .map_err(|_| StegoError::Format("decrypted message is not valid UTF-8".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn carrier(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            let v = (x * 13 + y * 29) as u8;
            Rgba([v, v.wrapping_add(51), v.wrapping_mul(3), 255])
        }))
    }

    #[test]
    fn test_in_memory_round_trip() {
        let image = carrier(128, 128);
        let encoded = hide_in_image(&image, "meet me at noon", "pw").unwrap();
        let message =
            reveal_from_image(&DynamicImage::ImageRgba8(encoded), "pw").unwrap();
        assert_eq!(message, "meet me at noon");
    }

    #[test]
    fn test_unicode_round_trip() {
        let image = carrier(128, 128);
        let secret = "δοκιμή 試験 🔑";
        let encoded = hide_in_image(&image, secret, "pässwörd").unwrap();
        let message =
            reveal_from_image(&DynamicImage::ImageRgba8(encoded), "pässwörd").unwrap();
        assert_eq!(message, secret);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let image = carrier(128, 128);
        let encoded = hide_in_image(&image, "meet me at noon", "right").unwrap();
        let result = reveal_from_image(&DynamicImage::ImageRgba8(encoded), "wrong");
        assert!(matches!(result, Err(StegoError::Authentication)));
    }

    #[test]
    fn test_tiny_image_has_no_capacity_for_a_token() {
        // 10x10 = 300 bits; even a sealed empty message is far larger
        let image = carrier(10, 10);
        let result = hide_in_image(&image, "hi", "pw");
        assert!(matches!(result, Err(StegoError::Capacity { .. })));
    }

    #[test]
    fn test_reveal_from_clean_image_never_decodes() {
        let image = carrier(64, 64);
        let result = reveal_from_image(&image, "pw");
        assert!(matches!(
            result,
            Err(StegoError::Format(_)) | Err(StegoError::Authentication)
        ));
    }
}

//! Bit-plane embed and extract.
//!
//! Frame layout in the bit domain: `[ length:4 bytes BE | payload bytes ]`,
//! each byte written MSB-first. Pixels are walked row-major; within a pixel
//! the bits land in channel order R, G, B. Channels past the third and every
//! pixel after the frame ends keep their original values.

use image::RgbaImage;

use crate::error::StegoError;
use crate::stego::capacity::{capacity_bits, check_capacity};

/// Width of the big-endian byte-length header preceding the payload.
pub const LENGTH_HEADER_BYTES: usize = 4;

/// Write `payload` into the least significant bits of `img`.
///
/// Fails with [`StegoError::Capacity`] before touching any pixel when the
/// framed payload does not fit.
pub fn embed_payload(img: &mut RgbaImage, payload: &[u8]) -> Result<(), StegoError> {
    let (width, height) = img.dimensions();
    check_capacity(width, height, payload.len())?;

    let mut frame = Vec::with_capacity(LENGTH_HEADER_BYTES + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);

    let mut data_index = 0; // current byte being embedded
    let mut bit_index = 0; // current bit within that byte (0-7)

    'outer: for y in 0..height {
        for x in 0..width {
            if data_index >= frame.len() {
                break 'outer;
            }

            let mut pixel = *img.get_pixel(x, y);

            // R, G, B carry one bit each; alpha stays untouched
            for channel in 0..3 {
                if data_index >= frame.len() {
                    break;
                }

                let bit = (frame[data_index] >> (7 - bit_index)) & 1;
                pixel[channel] = (pixel[channel] & 0xFE) | bit;

                bit_index += 1;
                if bit_index == 8 {
                    bit_index = 0;
                    data_index += 1;
                }
            }

            img.put_pixel(x, y, pixel);
        }
    }

    Ok(())
}

/// Read back whatever payload the least significant bits of `img` spell out.
///
/// Never fails: an image that was never embedded into simply yields
/// whichever bytes its pixel noise decodes to, and a corrupted length header
/// is clamped to what the image can physically hold. Deciding whether the
/// result is a real message is the cipher's job.
pub fn extract_payload(img: &RgbaImage) -> Vec<u8> {
    let (width, height) = img.dimensions();
    let capacity_bytes = (capacity_bits(width, height) / 8) as usize;

    let mut data: Vec<u8> = Vec::with_capacity(capacity_bytes.min(4096));
    let mut current = 0u8;
    let mut filled = 0u8;
    let mut payload_len: Option<usize> = None;

    'outer: for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);

            for channel in 0..3 {
                current = (current << 1) | (pixel[channel] & 1);
                filled += 1;
                if filled < 8 {
                    continue;
                }

                data.push(current);
                current = 0;
                filled = 0;

                if data.len() == LENGTH_HEADER_BYTES {
                    let declared =
                        u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
                    let max_len = capacity_bytes.saturating_sub(LENGTH_HEADER_BYTES);
                    payload_len = Some(declared.min(max_len));
                }
                if let Some(len) = payload_len {
                    if data.len() >= LENGTH_HEADER_BYTES + len {
                        break 'outer;
                    }
                }
            }
        }
    }

    match payload_len {
        Some(len) => data[LENGTH_HEADER_BYTES..LENGTH_HEADER_BYTES + len].to_vec(),
        // fewer than 4 header bytes of capacity, nothing to decode
        None => Vec::new(),
    }
}

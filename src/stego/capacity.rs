//! Embedding capacity arithmetic.

use crate::error::StegoError;
use crate::stego::codec::LENGTH_HEADER_BYTES;

/// Number of bits an image can carry: one per R, G and B channel of every
/// pixel. Alpha is excluded.
pub fn capacity_bits(width: u32, height: u32) -> u64 {
    width as u64 * height as u64 * 3
}

/// Verify that a payload of `payload_len` bytes fits in a `width` x `height`
/// image, counting the length header the codec prepends.
///
/// Called before any pixel is mutated, so a failing embed leaves the image
/// untouched.
pub fn check_capacity(width: u32, height: u32, payload_len: usize) -> Result<(), StegoError> {
    let required = 8 * (LENGTH_HEADER_BYTES + payload_len) as u64;
    let available = capacity_bits(width, height);
    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }
    Ok(())
}

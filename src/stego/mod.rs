//! # LSB Steganography
//!
//! Hides a byte payload in the least significant bits of an image's RGB
//! channels. The payload is framed with a 4-byte big-endian length header,
//! expanded to bits MSB-first, and written across pixels in row-major order,
//! one bit per color channel. Alpha is never touched, so the carrier keeps
//! its transparency.
//!
//! Capacity is `width * height * 3` bits; [`capacity`] checks it before a
//! single pixel changes.

pub mod capacity;
pub mod codec;

// Re-export the main entry points for convenience
pub use capacity::{capacity_bits, check_capacity};
pub use codec::{embed_payload, extract_payload};

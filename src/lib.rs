//! Hide encrypted messages inside images.
//!
//! A message is sealed with a password-derived key into an authenticated
//! token, then the token's bytes are written into the least significant
//! bits of the carrier image's RGB channels. Without the password the
//! carrier is indistinguishable from any other image; with it, [`reveal`]
//! recovers the exact message or fails loudly.

pub mod crypto;
pub mod error;
pub mod pipeline;
pub mod stego;
pub mod validate;

pub use error::StegoError;
pub use pipeline::{hide, hide_in_image, reveal, reveal_from_image};

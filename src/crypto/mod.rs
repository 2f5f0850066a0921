//! # Payload Encryption
//!
//! Protects a message before it ever touches pixel data. A password is
//! stretched into a 256-bit key ([`kdf`]), and the message is sealed into a
//! self-describing URL-safe text token ([`cipher`]) that the bit-plane codec
//! can embed as plain ASCII bytes.

pub mod cipher;
pub mod kdf;

// Re-export the main entry points for convenience
pub use cipher::TokenCipher;
pub use kdf::derive_key;

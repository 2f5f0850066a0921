//! Password-based key derivation.
//!
//! Stretches a human password into a 256-bit symmetric key with
//! PBKDF2-HMAC-SHA256 and encodes it in the URL-safe base64 alphabet that
//! [`TokenCipher`](crate::crypto::TokenCipher) consumes. Derivation is
//! deterministic: the decode path reproduces the exact key from the
//! password alone.

use base64::engine::general_purpose;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Fixed application salt.
///
/// Shared by every derivation so encode and decode agree on the key without
/// transporting a salt. This trades per-message salting away; the tool is
/// scoped to a single password per operation.
const KEY_SALT: &[u8] = b"st3g0n@gr@phy";

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// Derived key length in bytes (256-bit key).
pub const KEY_LEN: usize = 32;

/// Derive the encryption key from a password.
///
/// Same password, same key, every time. The returned string is the padded
/// URL-safe base64 encoding of the 32-byte key and is wiped from memory
/// when dropped.
pub fn derive_key(password: &str) -> Zeroizing<String> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), KEY_SALT, PBKDF2_ROUNDS, &mut *key);
    Zeroizing::new(general_purpose::URL_SAFE.encode(&*key))
}

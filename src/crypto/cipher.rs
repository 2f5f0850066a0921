//! Authenticated encryption of the hidden payload.
//!
//! A sealed message travels as a single URL-safe base64 token:
//!
//! `[ version:1 | nonce:12 | ciphertext + tag:16 ]`
//!
//! The token carries everything [`TokenCipher::open`] needs besides the key,
//! so the decode path has no external state. AES-256-GCM authenticates the
//! ciphertext; a wrong password or a flipped bit fails tag verification and
//! surfaces as [`StegoError::Authentication`] rather than garbage output.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::StegoError;

/// Current token format version.
pub const TOKEN_VERSION: u8 = 1;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Seals plaintext into tokens and opens them again.
pub struct TokenCipher {
    cipher: Aes256Gcm,
}

impl TokenCipher {
    /// Build a cipher from a URL-safe base64 encoded 32-byte key, as
    /// produced by [`derive_key`](crate::crypto::derive_key).
    pub fn new(encoded_key: &str) -> Result<Self, StegoError> {
        let key_bytes = general_purpose::URL_SAFE
            .decode(encoded_key)
            .map_err(|_| StegoError::Format("key is not valid base64".into()))?;
        let cipher = Aes256Gcm::new_from_slice(&key_bytes)
            .map_err(|_| StegoError::Format("key must decode to 32 bytes".into()))?;
        Ok(Self { cipher })
    }

    /// Encrypt `plaintext` under a fresh random nonce and encode the result
    /// as a single contiguous URL-safe base64 token.
    ///
    /// Sealing the same plaintext twice yields different tokens; both open
    /// to the same bytes.
    pub fn seal(&self, plaintext: &[u8]) -> Result<String, StegoError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| StegoError::Format("AEAD encryption failed".into()))?;

        let mut blob = Vec::with_capacity(1 + NONCE_LEN + ciphertext.len());
        blob.push(TOKEN_VERSION);
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);

        Ok(general_purpose::URL_SAFE.encode(blob))
    }

    /// Decrypt a token produced by [`TokenCipher::seal`].
    ///
    /// Returns [`StegoError::Format`] when the token is structurally broken
    /// (bad base64, too short, unknown version) and
    /// [`StegoError::Authentication`] when the integrity tag does not
    /// verify. No partially-decrypted data ever escapes.
    pub fn open(&self, token: &str) -> Result<Vec<u8>, StegoError> {
        let blob = general_purpose::URL_SAFE
            .decode(token)
            .map_err(|_| StegoError::Format("token is not valid base64".into()))?;

        if blob.len() < 1 + NONCE_LEN + TAG_LEN {
            return Err(StegoError::Format(format!(
                "token too short ({} bytes)",
                blob.len()
            )));
        }
        if blob[0] != TOKEN_VERSION {
            return Err(StegoError::Format(format!(
                "unsupported token version {:#04x}",
                blob[0]
            )));
        }

        let (nonce_bytes, ciphertext) = blob[1..].split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| StegoError::Authentication)
    }
}

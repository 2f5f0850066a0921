//! Error types for the hide/reveal pipeline.
//!
//! [`StegoError`] covers all failure modes from source validation through
//! embedding and token decryption. Every variant is recoverable by the
//! caller; nothing here aborts the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while hiding or revealing a message.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The source image path does not resolve to a readable file.
    #[error("image file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is not in the supported allow-list.
    #[error("unsupported image format \"{0}\" (supported: png, jpg, jpeg, gif, bmp, tiff)")]
    UnsupportedFormat(String),

    /// The payload does not fit in the image's pixel capacity.
    ///
    /// Raised before any pixel is mutated, so a failed embed never leaves
    /// a half-written image behind.
    #[error("payload needs {required} bits but the image only holds {available}")]
    Capacity { required: u64, available: u64 },

    /// Token authentication failed.
    ///
    /// Deliberately covers both a wrong password and corrupted or tampered
    /// data; callers cannot tell the two apart.
    #[error("wrong password or no hidden message found")]
    Authentication,

    /// The extracted bytes are not a well-formed token.
    ///
    /// From the caller's perspective this means the same as
    /// [`StegoError::Authentication`]: no valid message was recovered.
    #[error("extracted data is not a valid token: {0}")]
    Format(String),

    /// The image could not be decoded or encoded.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Filesystem failure while reading or writing an image.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

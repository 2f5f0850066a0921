//! Source image preconditions.
//!
//! Checked before any pixel work: the path must be a readable file and the
//! extension must be on the allow-list. Lossy formats pass the list (the
//! decoder reads them fine as carriers of *incoming* data) but are flagged
//! so the calling layer can warn that re-encoding destroys hidden bits.

use std::path::Path;

use crate::error::StegoError;

/// Extensions accepted as image sources.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// Formats whose encoders recompress pixel data, wiping LSB payloads.
const LOSSY_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Check that `path` points at a readable file with a supported extension.
pub fn validate_image_source(path: &Path) -> Result<(), StegoError> {
    if !path.is_file() {
        return Err(StegoError::NotFound(path.to_path_buf()));
    }
    let ext = file_extension(path);
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(StegoError::UnsupportedFormat(ext));
    }
    Ok(())
}

/// True when writing to `path` would recompress pixels and destroy an
/// embedded payload.
pub fn is_lossy_format(path: &Path) -> bool {
    LOSSY_EXTENSIONS.contains(&file_extension(path).as_str())
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

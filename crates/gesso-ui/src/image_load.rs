//! Decoding host-supplied images into pixmaps.

use std::fmt;

use gesso_engine::raster::Pixmap;

/// Error returned by [`decode_image`].
#[derive(Debug, Clone)]
pub struct ImageDecodeError(pub String);

impl fmt::Display for ImageDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image decode error: {}", self.0)
    }
}

impl std::error::Error for ImageDecodeError {}

/// Decodes encoded image bytes (PNG, JPEG, BMP, …) into an RGBA8 pixmap.
///
/// The format is sniffed from the bytes. The decoded image becomes an
/// owned pixmap the host can hand to [`crate::style::Background::Image`]
/// or a paint request's content image.
pub fn decode_image(bytes: &[u8]) -> Result<Pixmap, ImageDecodeError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ImageDecodeError(e.to_string()))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    Pixmap::from_rgba8(width, height, decoded.into_raw())
        .map_err(|e| ImageDecodeError(e.to_string()))
}

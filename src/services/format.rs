//! Output format handling service
//!
//! The HTTP response always carries PNG data. Removers that already emit PNG
//! are passed through byte for byte; anything else decodable is re-encoded
//! as RGBA PNG so transparency survives.

use crate::error::{Result, ServiceError};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// MIME type of every successful response
pub const PNG_MIME: &str = "image/png";

/// Check whether `data` starts with the PNG signature
#[must_use]
pub fn is_png(data: &[u8]) -> bool {
    data.get(0..PNG_SIGNATURE.len())
        .is_some_and(|slice| slice == PNG_SIGNATURE)
}

/// Guarantee that `data` is PNG-encoded
///
/// PNG input is decoded once to reject truncated or corrupt files, then
/// returned byte for byte.
///
/// # Errors
/// - Empty data
/// - PNG data that does not decode
/// - Data in no format the `image` crate can decode
pub fn ensure_png(data: Vec<u8>) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(ServiceError::processing("remover produced no output"));
    }

    if is_png(&data) {
        image::load_from_memory_with_format(&data, ImageFormat::Png).map_err(|e| {
            ServiceError::processing(format!("remover output is not valid PNG: {}", e))
        })?;
        return Ok(data);
    }

    let format = image::guess_format(&data).map_err(|e| {
        ServiceError::processing(format!("remover output is not a recognised image: {}", e))
    })?;

    tracing::debug!(
        format = ?format,
        bytes = data.len(),
        "Re-encoding remover output as PNG"
    );

    let image = image::load_from_memory_with_format(&data, format)?;
    encode_png(&image)
}

/// Encode an image as RGBA8 PNG
///
/// # Errors
/// - PNG encoder failure
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
    let mut buffer = Cursor::new(Vec::new());
    rgba.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

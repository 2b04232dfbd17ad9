//! Decoding of encoded image files (PNG, JPEG, ...) into bitmaps.

use std::path::Path;

use tracing::debug;

use crate::emotion_pipeline::bitmap::types::Bitmap;
use crate::emotion_pipeline::common::error::{EmotionError, Result};

/// Decodes an in-memory encoded image into a bitmap.
///
/// # Errors
///
/// * `EmotionError::ImageDecode` - the bytes are not a supported image
/// * `EmotionError::InvalidImage` - the decoded image has a zero dimension
pub fn decode(data: &[u8]) -> Result<Bitmap> {
    debug!("Decoding image, {} bytes", data.len());

    let image =
        image::load_from_memory(data).map_err(|e| EmotionError::ImageDecode(e.to_string()))?;
    let bitmap = Bitmap::from_rgba_image(&image.to_rgba8());

    if bitmap.is_empty() {
        return Err(EmotionError::InvalidImage(format!(
            "decoded image is {}x{}",
            bitmap.width(),
            bitmap.height()
        )));
    }

    debug!("Decoded image: {}x{}", bitmap.width(), bitmap.height());
    Ok(bitmap)
}

/// Reads and decodes an image file.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Bitmap> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| EmotionError::ImageDecode(format!("{}: {}", path.display(), e)))?;
    decode(&data)
}

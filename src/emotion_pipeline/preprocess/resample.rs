use image::imageops::{self, FilterType};
use tracing::debug;

use crate::emotion_pipeline::bitmap::Bitmap;

/// Resamples a bitmap to `width x height` with a bilinear (triangle) filter.
///
/// Matches the filtered scaling the model's training data went through; a
/// nearest-neighbour resize produces different tensors.
pub fn resample(bitmap: &Bitmap, width: u32, height: u32) -> Bitmap {
    debug!(
        "Resampling {}x{} -> {}x{}",
        bitmap.width(),
        bitmap.height(),
        width,
        height
    );

    let source = bitmap.to_rgba_image();
    let scaled = imageops::resize(&source, width, height, FilterType::Triangle);
    Bitmap::from_rgba_image(&scaled)
}

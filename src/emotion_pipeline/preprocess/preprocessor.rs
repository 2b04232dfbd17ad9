//! Bitmap to model-input tensor conversion.
//!
//! The steps are fixed by what the model saw during training:
//! 1. Resample to `target_size x target_size` with a smoothing filter
//! 2. Scan rows top-to-bottom, pixels left-to-right
//! 3. Take one 8-bit value per pixel and divide by 255
//!
//! The default channel takes the low byte of the packed colour, which is only
//! true grayscale when the input already is. `ChannelMode::Luma` desaturates
//! first instead; the two produce different tensors for colour input.

use tracing::{debug, instrument};

use crate::emotion_pipeline::bitmap::Bitmap;
use crate::emotion_pipeline::common::error::{EmotionError, Result};
use crate::emotion_pipeline::preprocess::grayscale::luma;
use crate::emotion_pipeline::preprocess::resample::resample;
use crate::emotion_pipeline::preprocess::types::{ChannelMode, InputTensor, PreprocessConfig};

/// Preprocesses with the shipped low-byte channel extraction.
///
/// # Arguments
///
/// * `bitmap` - Source image; must have a non-zero width and height
/// * `target_size` - Side length of the square tensor (48 for the bundled model)
///
/// # Returns
///
/// * `Ok(InputTensor)` - `target_size * target_size` values in [0, 1], row-major
/// * `Err(EmotionError::InvalidImage)` - zero-sized bitmap or target size
///
/// # Examples
///
/// ```
/// use facial_expression_rs::emotion_pipeline::{Bitmap, preprocess};
///
/// let white = Bitmap::filled(2, 2, 0xFFFF_FFFF);
/// let tensor = preprocess(&white, 48).unwrap();
/// assert_eq!(tensor.len(), 48 * 48);
/// assert!(tensor.as_slice().iter().all(|&v| v == 1.0));
/// ```
pub fn preprocess(bitmap: &Bitmap, target_size: u32) -> Result<InputTensor> {
    let config = PreprocessConfig::builder().target_size(target_size).build();
    preprocess_with(bitmap, &config)
}

#[instrument(skip(bitmap), fields(width = bitmap.width(), height = bitmap.height()))]
pub fn preprocess_with(bitmap: &Bitmap, config: &PreprocessConfig) -> Result<InputTensor> {
    if bitmap.is_empty() {
        return Err(EmotionError::InvalidImage(format!(
            "bitmap dimensions must be non-zero, got {}x{}",
            bitmap.width(),
            bitmap.height()
        )));
    }
    if config.target_size == 0 {
        return Err(EmotionError::InvalidImage(
            "target size must be non-zero".to_string(),
        ));
    }

    let size = config.target_size;
    let scaled = resample(bitmap, size, size);

    let extract: fn(u32) -> u8 = match config.channel {
        ChannelMode::LowByte => |argb| (argb & 0xFF) as u8,
        ChannelMode::Luma => luma,
    };

    let data: Vec<f32> = scaled
        .pixels()
        .iter()
        .map(|&argb| extract(argb) as f32 / 255.0)
        .collect();

    debug!(
        "Built {}x{} tensor ({:?} channel), {} values",
        size,
        size,
        config.channel,
        data.len()
    );

    Ok(InputTensor::from_normalized(size, data))
}

//! Preprocessing types and configuration

use crate::emotion_pipeline::common::error::{EmotionError, Result};

/// Side length of the square input the facial expression model was trained on.
pub const DEFAULT_INPUT_SIZE: u32 = 48;

/// Which per-pixel value is written into the tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Low byte of the packed colour (the blue channel). Assumes a near-grayscale input.
    #[default]
    LowByte,
    /// Luma from the saturation-zeroing colour matrix
    Luma,
}

/// Flat row-major `size * size` tensor of values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    size: u32,
    data: Vec<f32>,
}

impl InputTensor {
    /// Wraps an already normalized buffer.
    ///
    /// # Errors
    ///
    /// Returns `EmotionError::InvalidImage` when the length is not `size * size`
    /// or a value falls outside [0, 1].
    pub fn from_vec(size: u32, data: Vec<f32>) -> Result<Self> {
        let expected = size as usize * size as usize;
        if data.len() != expected {
            return Err(EmotionError::InvalidImage(format!(
                "tensor holds {} values, expected {}x{} = {}",
                data.len(),
                size,
                size,
                expected
            )));
        }
        if let Some(bad) = data.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(EmotionError::InvalidImage(format!(
                "tensor value {bad} is outside [0, 1]"
            )));
        }

        Ok(Self { size, data })
    }

    pub(crate) fn from_normalized(size: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), size as usize * size as usize);
        Self { size, data }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Model layout: batch, height, width, channel.
    pub fn shape(&self) -> [usize; 4] {
        [1, self.size as usize, self.size as usize, 1]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Configuration for bitmap preprocessing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Side length of the resampled square image
    pub target_size: u32,
    /// Per-pixel channel extraction
    pub channel: ChannelMode,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_INPUT_SIZE,
            channel: ChannelMode::LowByte,
        }
    }
}

impl PreprocessConfig {
    pub fn builder() -> PreprocessConfigBuilder {
        PreprocessConfigBuilder::default()
    }
}

/// Builder for PreprocessConfig
#[derive(Default)]
pub struct PreprocessConfigBuilder {
    target_size: Option<u32>,
    channel: Option<ChannelMode>,
}

impl PreprocessConfigBuilder {
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = Some(size);
        self
    }

    pub fn channel(mut self, channel: ChannelMode) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn build(self) -> PreprocessConfig {
        let default = PreprocessConfig::default();
        PreprocessConfig {
            target_size: self.target_size.unwrap_or(default.target_size),
            channel: self.channel.unwrap_or(default.channel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PreprocessConfig::builder()
            .target_size(64)
            .channel(ChannelMode::Luma)
            .build();

        assert_eq!(config.target_size, 64);
        assert_eq!(config.channel, ChannelMode::Luma);
    }

    #[test]
    fn test_config_defaults_match_model() {
        let config = PreprocessConfig::builder().build();
        assert_eq!(config, PreprocessConfig::default());
        assert_eq!(config.target_size, 48);
        assert_eq!(config.channel, ChannelMode::LowByte);
    }

    #[test]
    fn test_tensor_from_vec_validates_length() {
        let result = InputTensor::from_vec(2, vec![0.0; 3]);
        assert!(matches!(result, Err(EmotionError::InvalidImage(_))));
    }

    #[test]
    fn test_tensor_from_vec_validates_range() {
        let result = InputTensor::from_vec(1, vec![1.5]);
        assert!(matches!(result, Err(EmotionError::InvalidImage(_))));

        let result = InputTensor::from_vec(1, vec![f32::NAN]);
        assert!(matches!(result, Err(EmotionError::InvalidImage(_))));
    }

    #[test]
    fn test_tensor_shape_is_nhwc() {
        let tensor = InputTensor::from_vec(3, vec![0.5; 9]).unwrap();
        assert_eq!(tensor.shape(), [1, 3, 3, 1]);
        assert_eq!(tensor.len(), 9);
    }
}

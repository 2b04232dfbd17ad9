//! Preprocessing module
//!
//! Converts an arbitrary bitmap into the single-channel normalized tensor
//! the expression model consumes.

mod grayscale;
mod preprocessor;
mod resample;
pub mod types;

pub use grayscale::{luma, to_grayscale};
pub use preprocessor::{preprocess, preprocess_with};
pub use resample::resample;
pub use types::{
    ChannelMode, DEFAULT_INPUT_SIZE, InputTensor, PreprocessConfig, PreprocessConfigBuilder,
};

//! Inference module
//!
//! The trained model is an external collaborator: tensor in, score vector out.
//! This module defines that seam and the model asset it is loaded from.

mod engine;
mod model_asset;
#[cfg(feature = "onnx")]
pub mod onnx_engine;

pub use engine::InferenceEngine;
pub use model_asset::ModelAsset;

#[cfg(feature = "onnx")]
pub use onnx_engine::OnnxEngine;

// Stand-in when built without ONNX Runtime support
#[cfg(not(feature = "onnx"))]
pub struct OnnxEngine;

#[cfg(not(feature = "onnx"))]
impl OnnxEngine {
    pub fn from_asset(asset: &ModelAsset) -> Result<Self> {
        Err(EmotionError::ModelLoad(format!(
            "{}: built without the `onnx` feature",
            asset.source()
        )))
    }
}

#[cfg(not(feature = "onnx"))]
impl InferenceEngine for OnnxEngine {
    fn infer(&mut self, _input: &InputTensor) -> Result<OutputVector> {
        Err(EmotionError::Inference(
            "ONNX Runtime support is not compiled in".to_string(),
        ))
    }
}

#[cfg(not(feature = "onnx"))]
use crate::emotion_pipeline::{EmotionError, InputTensor, OutputVector, Result};

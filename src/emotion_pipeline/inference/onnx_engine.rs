//! ONNX Runtime backed inference engine.
//!
//! Expects a model exported with a single `[1, size, size, 1]` float input and
//! a single `[1, 7]` float output.

use ndarray::Array4;
use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, error, info};

use crate::emotion_pipeline::common::error::{EmotionError, Result};
use crate::emotion_pipeline::inference::engine::InferenceEngine;
use crate::emotion_pipeline::inference::model_asset::ModelAsset;
use crate::emotion_pipeline::preprocess::types::InputTensor;
use crate::emotion_pipeline::ranking::types::OutputVector;

pub struct OnnxEngine {
    session: Session,
}

impl OnnxEngine {
    /// Builds a session from model bytes held in memory.
    pub fn from_asset(asset: &ModelAsset) -> Result<Self> {
        let session = Session::builder()
            .map_err(|e| {
                EmotionError::ModelLoad(format!("Failed to create session builder: {e}"))
            })?
            .commit_from_memory(asset.bytes())
            .map_err(|e| {
                error!("Failed to load ONNX model {}: {}", asset.source(), e);
                EmotionError::ModelLoad(format!("{}: {e}", asset.source()))
            })?;

        info!(model = asset.source(), "ONNX session ready");
        Ok(Self { session })
    }
}

impl InferenceEngine for OnnxEngine {
    fn infer(&mut self, input: &InputTensor) -> Result<OutputVector> {
        let [n, h, w, c] = input.shape();
        let array = Array4::from_shape_vec((n, h, w, c), input.as_slice().to_vec())
            .map_err(|e| EmotionError::Inference(format!("Failed to shape input: {e}")))?;

        let tensor = Tensor::from_array(array)
            .map_err(|e| EmotionError::Inference(format!("Failed to create input tensor: {e}")))?;

        let outputs = self.session.run(ort::inputs![tensor]).map_err(|e| {
            error!("ONNX inference failed: {}", e);
            EmotionError::Inference(e.to_string())
        })?;

        let (_, value) = outputs
            .iter()
            .next()
            .ok_or_else(|| EmotionError::Inference("Model produced no outputs".to_string()))?;

        let (shape, scores) = value.try_extract_tensor::<f32>().map_err(|e| {
            EmotionError::Inference(format!("Failed to extract output tensor: {e}"))
        })?;

        debug!("Model output shape {:?}", shape);
        Ok(OutputVector::new(scores.to_vec()))
    }
}

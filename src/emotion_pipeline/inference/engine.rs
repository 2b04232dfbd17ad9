use crate::emotion_pipeline::common::error::Result;
use crate::emotion_pipeline::preprocess::types::InputTensor;
use crate::emotion_pipeline::ranking::types::OutputVector;

/// A loaded model that maps a `[1, size, size, 1]` tensor to one score per class.
///
/// Failures inside the runtime are reported as `EmotionError::Inference`.
pub trait InferenceEngine {
    fn infer(&mut self, input: &InputTensor) -> Result<OutputVector>;
}

impl<E: InferenceEngine + ?Sized> InferenceEngine for Box<E> {
    fn infer(&mut self, input: &InputTensor) -> Result<OutputVector> {
        (**self).infer(input)
    }
}

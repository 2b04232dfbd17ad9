//! Facial expression pipeline module
//!
//! This module turns a photograph into a ranked emotion report, with separate
//! modules for bitmaps, preprocessing, the inference seam and result ranking.

pub mod analysis;
pub mod bitmap;
pub mod common;
pub mod inference;
pub mod preprocess;
pub mod ranking;

pub use common::{
    EmotionError,
    Result,
};

pub use bitmap::Bitmap;

pub use preprocess::{
    ChannelMode,
    DEFAULT_INPUT_SIZE,
    InputTensor,
    PreprocessConfig,
    PreprocessConfigBuilder,
    preprocess,
    preprocess_with,
    to_grayscale,
};

pub use inference::{
    InferenceEngine,
    ModelAsset,
    OnnxEngine,
};

pub use ranking::{
    EMOTION_LABELS,
    Emotion,
    NUM_CLASSES,
    OutputVector,
    RankedEntry,
    RankedResult,
    rank,
    rank_emotions,
};

pub use analysis::{
    Analysis,
    EmotionPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
    PipelineTimings,
};

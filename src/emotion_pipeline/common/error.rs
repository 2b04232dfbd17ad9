use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmotionError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("Output dimension mismatch: expected {expected} scores, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Degenerate score distribution: raw scores sum to zero")]
    DegenerateDistribution,

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmotionError {
    /// True for failures reported by the inference collaborator rather than the core.
    pub fn is_engine_failure(&self) -> bool {
        matches!(self, EmotionError::ModelLoad(_) | EmotionError::Inference(_))
    }
}

pub type Result<T> = std::result::Result<T, EmotionError>;

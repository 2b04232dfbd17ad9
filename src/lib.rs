pub mod emotion_pipeline;
pub mod logger;

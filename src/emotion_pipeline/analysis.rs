//! Analysis orchestration
//!
//! Chains decoding, preprocessing, inference and ranking for one model session.

mod pipeline;
mod timing;
pub mod types;


pub use pipeline::EmotionPipeline;
pub use timing::{PipelineTimings, StageTiming, Timer};
pub use types::{Analysis, PipelineConfig, PipelineConfigBuilder};

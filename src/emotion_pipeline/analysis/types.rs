//! Pipeline configuration and output types

use crate::emotion_pipeline::analysis::timing::PipelineTimings;
use crate::emotion_pipeline::preprocess::types::{ChannelMode, PreprocessConfig};
use crate::emotion_pipeline::ranking::types::RankedResult;

/// Configuration for an analysis session
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Bitmap to tensor settings; must match the loaded model
    pub preprocess: PreprocessConfig,
    /// Whether to log a per-stage timing summary after each analysis
    pub log_timings: bool,
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    target_size: Option<u32>,
    channel: Option<ChannelMode>,
    log_timings: Option<bool>,
}

impl PipelineConfigBuilder {
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = Some(size);
        self
    }

    pub fn channel(mut self, channel: ChannelMode) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn log_timings(mut self, enable: bool) -> Self {
        self.log_timings = Some(enable);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        let mut preprocess = PreprocessConfig::builder();
        if let Some(size) = self.target_size {
            preprocess = preprocess.target_size(size);
        }
        if let Some(channel) = self.channel {
            preprocess = preprocess.channel(channel);
        }

        PipelineConfig {
            preprocess: preprocess.build(),
            log_timings: self.log_timings.unwrap_or(default.log_timings),
        }
    }
}

/// Outcome of one analyzed image
#[derive(Debug, Clone)]
pub struct Analysis {
    pub ranked: RankedResult,
    pub timings: PipelineTimings,
}

impl Analysis {
    /// Multi-line text for the display surface.
    pub fn report(&self) -> String {
        self.ranked.to_string()
    }
}

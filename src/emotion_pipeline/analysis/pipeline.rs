use std::path::Path;

use tracing::{debug, info, instrument};

use crate::emotion_pipeline::{
    analysis::timing::PipelineTimings,
    analysis::types::{Analysis, PipelineConfig},
    bitmap::{self, Bitmap},
    common::error::Result,
    inference::{InferenceEngine, ModelAsset, OnnxEngine},
    preprocess::preprocess_with,
    ranking::rank_emotions,
};

/// Bitmap -> tensor -> model -> ranked report, for one model session.
pub struct EmotionPipeline<E: InferenceEngine> {
    engine: E,
    config: PipelineConfig,
}

impl EmotionPipeline<OnnxEngine> {
    /// Loads an ONNX model file and builds a pipeline around it.
    pub fn from_model_file<P: AsRef<Path>>(model_path: P, config: PipelineConfig) -> Result<Self> {
        let asset = ModelAsset::load(model_path)?;
        let engine = OnnxEngine::from_asset(&asset)?;
        Ok(Self::with_engine(engine, config))
    }
}

impl<E: InferenceEngine> EmotionPipeline<E> {
    pub fn with_engine(engine: E, config: PipelineConfig) -> Self {
        Self { engine, config }
    }

    #[instrument(skip(self, bitmap), fields(width = bitmap.width(), height = bitmap.height()))]
    pub fn analyze(&mut self, bitmap: &Bitmap) -> Result<Analysis> {
        self.run(bitmap, PipelineTimings::new())
    }

    /// Decodes an encoded image (PNG, JPEG, ...) and analyzes it.
    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn analyze_bytes(&mut self, data: &[u8]) -> Result<Analysis> {
        let mut timings = PipelineTimings::new();

        let bitmap = {
            let _span = tracing::info_span!("decode_image").entered();
            timings.time("decode", || bitmap::decode(data))?
        };

        self.run(&bitmap, timings)
    }

    #[instrument(skip(self, path))]
    pub fn analyze_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Analysis> {
        let path = path.as_ref();
        info!(input = %path.display(), "Analyzing image file");

        let mut timings = PipelineTimings::new();
        let bitmap = {
            let _span = tracing::info_span!("decode_image").entered();
            timings.time("decode", || bitmap::open(path))?
        };

        self.run(&bitmap, timings)
    }

    fn run(&mut self, bitmap: &Bitmap, mut timings: PipelineTimings) -> Result<Analysis> {
        let tensor = {
            let _span = tracing::info_span!("preprocess", size = self.config.preprocess.target_size)
                .entered();
            timings.time("preprocess", || preprocess_with(bitmap, &self.config.preprocess))?
        };

        let output = {
            let _span = tracing::info_span!("infer").entered();
            let engine = &mut self.engine;
            timings.time("infer", || engine.infer(&tensor))?
        };
        debug!("Raw scores: {:?}", output.as_slice());

        let ranked = {
            let _span = tracing::info_span!("rank").entered();
            timings.time("rank", || rank_emotions(&output))?
        };

        if let Some(top) = ranked.top() {
            info!(emotion = %top.label, percentage = top.percentage, "Analysis complete");
        }
        if self.config.log_timings {
            timings.log_summary();
        }

        Ok(Analysis { ranked, timings })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

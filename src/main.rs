use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use facial_expression_rs::emotion_pipeline::{
    ChannelMode, DEFAULT_INPUT_SIZE, EmotionPipeline, PipelineConfig,
};
use facial_expression_rs::logger;
use tracing::info;

/// Rank the facial expressions in a photograph.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Image file to analyze (PNG or JPEG).
    #[arg(short, long)]
    image: PathBuf,

    /// Path to the facial expression ONNX model.
    #[arg(short, long, default_value = "assets/facial_recognition_model.onnx")]
    model: PathBuf,

    /// Side length of the square model input.
    #[arg(long, default_value_t = DEFAULT_INPUT_SIZE)]
    size: u32,

    /// Desaturate pixels instead of reading the low colour byte.
    #[arg(long)]
    grayscale: bool,

    /// Log per-stage timings.
    #[arg(long)]
    timings: bool,

    /// Enable debug logging for this crate.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = PipelineConfig::builder()
        .target_size(args.size)
        .channel(if args.grayscale {
            ChannelMode::Luma
        } else {
            ChannelMode::LowByte
        })
        .log_timings(args.timings)
        .build();

    let mut pipeline = EmotionPipeline::from_model_file(&args.model, config)
        .with_context(|| format!("failed to load model {}", args.model.display()))?;

    info!(
        "Pipeline initialized: {}x{} input, {:?} channel",
        pipeline.config().preprocess.target_size,
        pipeline.config().preprocess.target_size,
        pipeline.config().preprocess.channel
    );

    let analysis = pipeline
        .analyze_file(&args.image)
        .with_context(|| format!("failed to analyze {}", args.image.display()))?;

    print!("{}", analysis.report());
    Ok(())
}

//! Result ranking module
//!
//! Turns raw model scores into a normalized, descending report.

pub mod labels;
mod ranker;
pub mod types;

pub use labels::{EMOTION_LABELS, Emotion, NUM_CLASSES};
pub use ranker::{rank, rank_emotions};
pub use types::{OutputVector, RankedEntry, RankedResult, format_percentage};

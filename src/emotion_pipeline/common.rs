//! Common utilities module
//!
//! This module contains shared utilities used across the emotion pipeline.

pub mod error;

pub use error::{EmotionError, Result};

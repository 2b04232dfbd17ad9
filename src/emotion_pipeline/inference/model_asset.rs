use std::path::Path;

use tracing::{debug, info};

use crate::emotion_pipeline::common::error::{EmotionError, Result};

/// Read-only bytes of a model file. The format is opaque to this crate.
#[derive(Debug, Clone)]
pub struct ModelAsset {
    source: String,
    bytes: Vec<u8>,
}

impl ModelAsset {
    /// Loads a model file from disk.
    ///
    /// # Errors
    ///
    /// Returns `EmotionError::ModelLoad` if the file cannot be read or is empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(model = %path.display(), "Loading model asset");

        let bytes = std::fs::read(path)
            .map_err(|e| EmotionError::ModelLoad(format!("{}: {}", path.display(), e)))?;

        Self::from_bytes(path.display().to_string(), bytes)
    }

    /// Wraps model bytes that were obtained elsewhere (bundled or downloaded).
    pub fn from_bytes(source: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let source = source.into();
        if bytes.is_empty() {
            return Err(EmotionError::ModelLoad(format!("{source}: model file is empty")));
        }

        debug!("Model asset {} holds {} bytes", source, bytes.len());
        Ok(Self { source, bytes })
    }

    /// Where the bytes came from, for diagnostics.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

//! Bitmap module
//!
//! This module provides the immutable pixel grid fed into preprocessing,
//! along with decoding of encoded image files into bitmaps.

mod decoder;
pub mod types;

pub use decoder::{decode, open};
pub use types::Bitmap;

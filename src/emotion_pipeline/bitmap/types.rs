//! Bitmap data types

use image::{Rgba, RgbaImage};

use crate::emotion_pipeline::common::error::{EmotionError, Result};

/// Immutable grid of packed `0xAARRGGBB` pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Creates a bitmap from packed ARGB pixels.
    ///
    /// Zero-sized bitmaps are accepted here; preprocessing is where they get rejected.
    ///
    /// # Errors
    ///
    /// Returns `EmotionError::InvalidImage` if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(EmotionError::InvalidImage(format!(
                "pixel buffer holds {} values, expected {}x{} = {}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a bitmap where every pixel has the same packed colour.
    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![argb; width as usize * height as usize],
        }
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| pack_argb(*p)).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let raw: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|&argb| unpack_argb(argb).0)
            .collect();
        // Length is width * height * 4 by construction.
        RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major packed pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Builds a new bitmap of the same size by transforming each pixel.
    pub fn map_pixels<F: Fn(u32) -> u32>(&self, f: F) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

pub(crate) fn pack_argb(pixel: Rgba<u8>) -> u32 {
    let [r, g, b, a] = pixel.0;
    u32::from_be_bytes([a, r, g, b])
}

pub(crate) fn unpack_argb(argb: u32) -> Rgba<u8> {
    let [a, r, g, b] = argb.to_be_bytes();
    Rgba([r, g, b, a])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_mismatched_buffer() {
        let result = Bitmap::new(3, 2, vec![0; 5]);
        assert!(matches!(result, Err(EmotionError::InvalidImage(_))));
    }

    #[test]
    fn test_zero_sized_bitmap_is_constructible() {
        let bitmap = Bitmap::new(0, 0, Vec::new()).unwrap();
        assert!(bitmap.is_empty());
        assert!(bitmap.pixels().is_empty());
    }

    #[test]
    fn test_packing_matches_argb_layout() {
        let packed = pack_argb(Rgba([0x12, 0x34, 0x56, 0xFF]));
        assert_eq!(packed, 0xFF12_3456);
        assert_eq!(unpack_argb(packed), Rgba([0x12, 0x34, 0x56, 0xFF]));
    }

    #[test]
    fn test_rgba_image_conversion_preserves_pixels() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([0, 0, 255, 128]));

        let bitmap = Bitmap::from_rgba_image(&image);
        assert_eq!(bitmap.pixel(0, 0), Some(0xFFFF_0000));
        assert_eq!(bitmap.pixel(1, 0), Some(0x8000_00FF));
        assert_eq!(bitmap.pixel(2, 0), None);
        assert_eq!(bitmap.to_rgba_image(), image);
    }
}

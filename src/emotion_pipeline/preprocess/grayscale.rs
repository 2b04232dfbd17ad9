use crate::emotion_pipeline::bitmap::Bitmap;

// Rows of a saturation-zero colour matrix.
const LUMA_R: f32 = 0.213;
const LUMA_G: f32 = 0.715;
const LUMA_B: f32 = 0.072;

/// Luma of a packed ARGB pixel, ignoring alpha.
pub fn luma(argb: u32) -> u8 {
    let [_, r, g, b] = argb.to_be_bytes();
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Returns a new bitmap with every pixel desaturated; alpha is kept.
pub fn to_grayscale(bitmap: &Bitmap) -> Bitmap {
    bitmap.map_pixels(|argb| {
        let alpha = argb >> 24;
        let y = luma(argb) as u32;
        (alpha << 24) | (y << 16) | (y << 8) | y
    })
}

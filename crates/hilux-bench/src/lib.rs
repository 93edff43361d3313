//! Benchmarks for hilux.
//!
//! Run with: `cargo bench -p hilux-bench`

use hilux_core::{PixelBuffer, PixelLayout, Result};

/// Builds a `size x size` RGB test image: a horizontal ramp from black to
/// `peak` with a saturated green stripe every eighth row.
pub fn test_image(size: u32, peak: f32) -> Result<PixelBuffer> {
    let mut data = Vec::with_capacity((size * size * 3) as usize);
    for y in 0..size {
        for x in 0..size {
            let t = peak * x as f32 / size.saturating_sub(1).max(1) as f32;
            if y % 8 == 0 {
                data.extend_from_slice(&[0.0, t, 0.0]);
            } else {
                data.extend_from_slice(&[t, t * 0.9, t * 0.8]);
            }
        }
    }
    PixelBuffer::from_data(size, size, PixelLayout::Rgb, data)
}

//! Pixel buffers.
//!
//! [`PixelBuffer`] is the analysis input: interleaved `f32` samples in
//! row-major order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//! ```
//!
//! [`PreviewImage`] is the 8-bit RGBA false-color output.
//!
//! # Usage
//!
//! ```rust
//! use hilux_core::{PixelBuffer, PixelLayout};
//!
//! let buf = PixelBuffer::from_data(2, 1, PixelLayout::Rgb, vec![0.5; 6]).unwrap();
//! assert_eq!(buf.pixel_count(), 2);
//! assert_eq!(buf.pixel(1), &[0.5, 0.5, 0.5]);
//! ```

use crate::{Error, PixelLayout, Result};

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure instead of aborting.
///
/// # Example
///
/// ```rust
/// use hilux_core::try_alloc;
///
/// let v: Vec<f32> = try_alloc(16, 0.0).unwrap();
/// assert_eq!(v.len(), 16);
/// ```
pub fn try_alloc<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|e| {
        Error::allocation_failed(len.saturating_mul(std::mem::size_of::<T>()), e.to_string())
    })?;
    v.resize(len, value);
    Ok(v)
}

/// Number of samples for `width x height` pixels of `channels` samples each.
fn sample_count(width: u32, height: u32, channels: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "width and height must be > 0"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows"))
}

/// Owned `f32` pixel buffer with a fixed [`PixelLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    data: Vec<f32>,
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] for empty or overflowing dimensions,
    /// [`Error::AllocationFailed`] when the samples cannot be reserved.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Result<Self> {
        let len = sample_count(width, height, layout.channels())?;
        Ok(Self {
            data: try_alloc(len, 0.0)?,
            width,
            height,
            layout,
        })
    }

    /// Wraps existing samples.
    ///
    /// `data` must hold exactly `width * height * layout.channels()` values.
    pub fn from_data(width: u32, height: u32, layout: PixelLayout, data: Vec<f32>) -> Result<Self> {
        let expected = sample_count(width, height, layout.channels())?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Builds a buffer from per-pixel arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hilux_core::{PixelBuffer, PixelLayout};
    ///
    /// let pixels = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    /// let buf = PixelBuffer::from_pixels(2, 1, PixelLayout::Rgb, &pixels).unwrap();
    /// assert_eq!(buf.pixel(1)[1], 1.0);
    /// ```
    pub fn from_pixels<const N: usize>(
        width: u32,
        height: u32,
        layout: PixelLayout,
        pixels: &[[f32; N]],
    ) -> Result<Self> {
        if N != layout.channels() {
            return Err(Error::channel_mismatch(layout.channels(), N));
        }
        Self::from_data(width, height, layout, pixels.iter().flatten().copied().collect())
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample layout.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// All samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// All samples, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Samples of the pixel at linear index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= pixel_count()`.
    #[inline]
    pub fn pixel(&self, index: usize) -> &[f32] {
        let c = self.channels();
        &self.data[index * c..(index + 1) * c]
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }
}

/// 8-bit RGBA image with straight alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PreviewImage {
    /// Channels per pixel.
    pub const CHANNELS: usize = 4;

    /// Creates a transparent black image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = sample_count(width, height, Self::CHANNELS)?;
        Ok(Self {
            data: try_alloc(len, 0)?,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// RGBA pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Interleaved RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Interleaved RGBA bytes, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

//! Pixel layouts.

use std::fmt;

/// Interleaved channel layout of a [`PixelBuffer`](crate::PixelBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Encoded RGB triplets.
    Rgb,
    /// Encoded RGB plus straight alpha.
    Rgba,
    /// Absolute CIE XYZ triplets, Y in nits.
    Xyz,
}

impl PixelLayout {
    /// Number of interleaved samples per pixel.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb | Self::Xyz => 3,
            Self::Rgba => 4,
        }
    }

    /// Returns `true` for the layouts carrying alpha.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Returns `true` for encoded RGB layouts.
    #[inline]
    pub const fn is_rgb(self) -> bool {
        matches!(self, Self::Rgb | Self::Rgba)
    }

    /// Short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Xyz => "XYZ",
        }
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

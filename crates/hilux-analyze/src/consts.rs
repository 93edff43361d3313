//! Named constants of the highlight analysis.

/// Default target display luminance in nits.
pub const DEFAULT_TARGET_LUMINANCE: u32 = 300;

/// Default luminance for sources without a luminance tag.
pub const DEFAULT_LUMINANCE: u32 = hilux_color::DEFAULT_LUMINANCE;

/// A pixel is overbright only when `Y / max_Y` exceeds `1 + this`.
///
/// At 10,000 nits this is a 1 nit margin.
pub const REASONABLY_OVERBRIGHT: f32 = 0.0001;

/// Sources whose green y is this close to sRGB's are treated as sRGB.
pub const SRGB_GREEN_Y_EPSILON: f32 = 0.0001;

/// sRGB edge distance below which a chromaticity is in gamut.
pub const IN_GAMUT_DISTANCE: f32 = 0.0002;

/// Source edge distance at or above which a chromaticity is on the source
/// boundary.
pub const ON_EDGE_DISTANCE: f32 = -0.00001;

/// Out-of-gamut ratios at or above this snap to 1.
pub const RATIO_SNAP: f32 = 0.9999;

/// Tint strength of a barely highlighted pixel.
pub const MIN_HIGHLIGHT: f32 = 0.4;

/// Encoding gamma of the preview image.
pub const PREVIEW_GAMMA: f32 = 2.2;

/// Entries in a percentile table (0 through 100 inclusive).
pub const PERCENTILE_COUNT: usize = 101;

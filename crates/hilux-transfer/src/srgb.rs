//! sRGB transfer function (IEC 61966-2-1).
//!
//! Piecewise: a linear toe near black and a 2.4 power segment above it.

/// Encoded value where the linear toe ends.
const ENCODED_BREAK: f32 = 0.04045;

/// Linear value where the linear toe ends.
const LINEAR_BREAK: f32 = 0.0031308;

/// Slope of the linear toe.
const TOE_SLOPE: f32 = 12.92;

/// sRGB EOTF: encoded [0, 1] to linear [0, 1].
///
/// # Example
///
/// ```rust
/// use hilux_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= ENCODED_BREAK {
        v / TOE_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: linear [0, 1] to encoded [0, 1].
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= LINEAR_BREAK {
        l * TOE_SLOPE
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

//! Luminance ceiling of a chromaticity.
//!
//! The brightest a color of chromaticity (x, y) can be in a gamut is
//! reached when its largest linear channel hits 1. The ceiling is the Y of
//! that color, relative to the gamut's white (Y = 1).

use hilux_math::{approx_eq, xyy_to_xyz};

use crate::Transform;

/// Chromaticities with `|y|` below this have no defined ceiling.
const Y_EPSILON: f32 = 1e-10;

/// Relative luminance ceiling of chromaticity `(x, y)`.
///
/// `to_xyz` and `from_xyz` convert between XYZ and a linear (gamma 1),
/// 1-nit RGB profile of the gamut in question. Returns 0 when `y` is ~0 or
/// no channel is positive.
///
/// # Example
///
/// ```rust
/// use hilux_color::{luminance_ceiling, ColorProfile, Endpoint, ToneMap, Transform};
/// use hilux_core::PixelLayout;
/// use hilux_primaries::{D65_XY, SRGB};
///
/// let linear = Endpoint::profile(ColorProfile::linear(SRGB, 1), PixelLayout::Rgb);
/// let to_xyz = Transform::build(&linear, &Endpoint::Xyz, ToneMap::Off).unwrap();
/// let from_xyz = Transform::build(&Endpoint::Xyz, &linear, ToneMap::Off).unwrap();
///
/// let white = luminance_ceiling(&to_xyz, &from_xyz, D65_XY.0, D65_XY.1);
/// assert!((white - 1.0).abs() < 1e-3);
/// ```
pub fn luminance_ceiling(to_xyz: &Transform, from_xyz: &Transform, x: f32, y: f32) -> f32 {
    if approx_eq(y, 0.0, Y_EPSILON) {
        return 0.0;
    }

    let rgb = from_xyz.apply(xyy_to_xyz(x, y, 1.0));
    let peak = rgb.max_element();
    if peak.is_nan() || peak <= 0.0 {
        return 0.0;
    }

    to_xyz.apply(rgb / peak).y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorProfile, Endpoint, ToneMap};
    use approx::assert_relative_eq;
    use hilux_core::PixelLayout;
    use hilux_primaries::{Primaries, D65_XY, REC2020, SRGB};

    fn pair(primaries: Primaries) -> (Transform, Transform) {
        let linear = Endpoint::profile(ColorProfile::linear(primaries, 1), PixelLayout::Rgb);
        (
            Transform::build(&linear, &Endpoint::Xyz, ToneMap::Off).unwrap(),
            Transform::build(&Endpoint::Xyz, &linear, ToneMap::Off).unwrap(),
        )
    }

    #[test]
    fn test_white_is_one() {
        let (to, from) = pair(REC2020);
        assert_relative_eq!(luminance_ceiling(&to, &from, D65_XY.0, D65_XY.1), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_primaries_match_matrix_row() {
        let (to, from) = pair(SRGB);
        // Pure red peaks at the red column's Y.
        let red = luminance_ceiling(&to, &from, SRGB.red.0, SRGB.red.1);
        assert_relative_eq!(red, 0.2126, epsilon = 1e-3);
        let green = luminance_ceiling(&to, &from, SRGB.green.0, SRGB.green.1);
        assert_relative_eq!(green, 0.7152, epsilon = 1e-3);
    }

    #[test]
    fn test_ceiling_in_unit_range() {
        let (to, from) = pair(SRGB);
        for (x, y) in [(0.3, 0.3), (0.4, 0.4), (0.25, 0.35), (0.5, 0.35)] {
            let c = luminance_ceiling(&to, &from, x, y);
            assert!(c > 0.0 && c <= 1.0 + 1e-4, "({x}, {y}) -> {c}");
        }
    }

    #[test]
    fn test_degenerate_y() {
        let (to, from) = pair(SRGB);
        assert_eq!(luminance_ceiling(&to, &from, 0.3, 0.0), 0.0);
    }
}

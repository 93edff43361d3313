//! CIE XYZ <-> xyY conversion.
//!
//! ```rust
//! use hilux_math::{Vec3, chroma::{xyz_to_xyy, xyy_to_xyz}};
//!
//! let d65 = (0.3127, 0.3290);
//! let xyy = xyz_to_xyy(Vec3::new(0.9505, 1.0, 1.089), d65);
//! assert!((xyy.x - 0.3127).abs() < 1e-3);
//! let back = xyy_to_xyz(xyy.x, xyy.y, xyy.big_y);
//! assert!((back.z - 1.089).abs() < 1e-3);
//! ```

use crate::Vec3;

/// Chromaticity plus luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyy {
    /// Chromaticity x.
    pub x: f32,
    /// Chromaticity y.
    pub y: f32,
    /// Luminance Y.
    pub big_y: f32,
}

/// Converts XYZ to xyY.
///
/// When `Y <= 0` the chromaticity is meaningless; `white` is substituted
/// and Y is reported as 0. A positive Y whose XYZ sum is not positive keeps
/// its Y but also takes the `white` chromaticity.
#[inline]
pub fn xyz_to_xyy(xyz: Vec3, white: (f32, f32)) -> Xyy {
    if xyz.y.is_nan() || xyz.y <= 0.0 {
        return Xyy {
            x: white.0,
            y: white.1,
            big_y: 0.0,
        };
    }
    let sum = xyz.sum();
    if sum.is_nan() || sum <= 0.0 {
        return Xyy {
            x: white.0,
            y: white.1,
            big_y: xyz.y,
        };
    }
    Xyy {
        x: xyz.x / sum,
        y: xyz.y / sum,
        big_y: xyz.y,
    }
}

/// Converts xyY to XYZ. Returns zero when `y` is zero.
#[inline]
pub fn xyy_to_xyz(x: f32, y: f32, big_y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        return Vec3::ZERO;
    }
    Vec3::new(x * big_y / y, big_y, (1.0 - x - y) * big_y / y)
}

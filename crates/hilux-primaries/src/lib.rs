//! # hilux-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! A color space's gamut is the triangle spanned by its three primaries in
//! the CIE xy chromaticity plane; its white point fixes the relative
//! weights of the primaries.
//!
//! # Included Color Spaces
//!
//! | Color Space | Gamut Size | Primary Use |
//! |-------------|------------|-------------|
//! | sRGB / Rec.709 | Small | Web, HDTV, highlight reference |
//! | Display P3 | Medium | Apple displays |
//! | Rec.2020 | Large | UHDTV, HDR10, HLG |
//!
//! # Usage
//!
//! ```rust
//! use hilux_primaries::{SRGB, rgb_to_xyz_matrix};
//! use hilux_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB).unwrap();
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use hilux_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Three primaries and a white point, all as CIE xy chromaticities.
///
/// # Example
///
/// ```rust
/// use hilux_primaries::Primaries;
///
/// let custom = Primaries {
///     red: (0.64, 0.33),
///     green: (0.30, 0.60),
///     blue: (0.15, 0.06),
///     white: (0.3127, 0.3290),
/// };
/// assert!(!custom.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub red: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub green: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub blue: (f32, f32),
    /// White point (x, y) chromaticity
    pub white: (f32, f32),
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.white.0, self.white.1)
    }

    /// Twice the signed area of the red-green-blue triangle.
    ///
    /// Zero when two primaries coincide or all three are collinear.
    pub fn signed_area(&self) -> f32 {
        let (rx, ry) = self.red;
        let (gx, gy) = self.green;
        let (bx, by) = self.blue;
        (gx - rx) * (by - ry) - (bx - rx) * (gy - ry)
    }

    /// Returns `true` if the primaries do not span a triangle.
    pub fn is_degenerate(&self) -> bool {
        self.signed_area().abs() < 1e-9 || rgb_to_xyz_matrix(self).is_none()
    }
}

impl Default for Primaries {
    fn default() -> Self {
        SRGB
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f32, f32) = (0.3127, 0.3290);

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
///
/// The reference triangle for out-of-gamut detection.
pub const SRGB: Primaries = Primaries {
    red: (0.64, 0.33),
    green: (0.30, 0.60),
    blue: (0.15, 0.06),
    white: D65_XY,
};

/// Rec.709 primaries (identical to sRGB).
pub const REC709: Primaries = SRGB;

/// Rec.2020 primaries (D65 white point).
pub const REC2020: Primaries = Primaries {
    red: (0.708, 0.292),
    green: (0.170, 0.797),
    blue: (0.131, 0.046),
    white: D65_XY,
};

/// Display P3 primaries (D65 white point).
pub const DISPLAY_P3: Primaries = Primaries {
    red: (0.680, 0.320),
    green: (0.265, 0.690),
    blue: (0.150, 0.060),
    white: D65_XY,
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Columns are the primaries' XYZ scaled so that RGB (1, 1, 1) lands on the
/// white point with Y = 1. Returns `None` for degenerate primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve `M * S = W` for the per-primary scale `S`
/// 3. Multiply primaries by scaling factors
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.red.0, primaries.red.1);
    let g_xyz = xy_to_xyz(primaries.green.0, primaries.green.1);
    let b_xyz = xy_to_xyz(primaries.blue.0, primaries.blue.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse()? * w_xyz;
    if !s.is_finite() {
        return None;
    }

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// The inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries)?.inverse()
}

//! Hybrid Log-Gamma (HLG) transfer function.
//!
//! HLG is relative: the signal encodes scene light in [0, 1] and the
//! display applies an OOTF that depends on its peak luminance.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 1] (scene-referred, relative)
//!
//! # Reference
//!
//! ITU-R BT.2100-2

// HLG constants
const A: f32 = 0.17883277;
const B: f32 = 0.28466892; // 1 - 4*A
const C: f32 = 0.55991073; // 0.5 - A*ln(4*A)

/// System gamma for a 1000 cd/m2 reference display.
pub const SYSTEM_GAMMA: f32 = 1.2;

/// Signal level of diffuse white in BT.2408.
pub const DIFFUSE_WHITE_SIGNAL: f32 = 0.75;

/// HLG OETF: Encodes linear scene light to HLG signal.
///
/// # Formula
///
/// ```text
/// if E <= 1/12:
///     E' = sqrt(3 * E)
/// else:
///     E' = A * ln(12*E - B) + C
/// ```
#[inline]
pub fn oetf(e: f32) -> f32 {
    if e <= 0.0 {
        0.0
    } else if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG inverse OETF: Decodes HLG signal to linear scene light.
///
/// # Example
///
/// ```rust
/// use hilux_transfer::hlg::{eotf, oetf};
///
/// let scene = eotf(0.5);
/// assert!((scene - 1.0 / 12.0).abs() < 1e-6);
/// assert!((oetf(scene) - 0.5).abs() < 1e-5);
/// ```
#[inline]
pub fn eotf(ep: f32) -> f32 {
    if ep <= 0.0 {
        0.0
    } else if ep <= 0.5 {
        ep * ep / 3.0
    } else {
        (((ep - C) / A).exp() + B) / 12.0
    }
}

#[inline]
fn luminance(rgb: [f32; 3], row: [f32; 3]) -> f32 {
    rgb[0] * row[0] + rgb[1] * row[1] + rgb[2] * row[2]
}

/// HLG OOTF: scene linear RGB to display linear RGB (relative to peak).
///
/// `row` holds the luminance weights of the RGB space (the Y row of its
/// RGB to XYZ matrix). Pixels with non-positive luminance pass through.
///
/// ```text
/// Fd = Ys^(gamma - 1) * E
/// ```
#[inline]
pub fn ootf(rgb: [f32; 3], row: [f32; 3]) -> [f32; 3] {
    let ys = luminance(rgb, row);
    if ys <= 0.0 {
        return rgb;
    }
    let gain = ys.powf(SYSTEM_GAMMA - 1.0);
    [rgb[0] * gain, rgb[1] * gain, rgb[2] * gain]
}

/// Inverse of [`ootf`]: display linear RGB back to scene linear RGB.
#[inline]
pub fn inverse_ootf(rgb: [f32; 3], row: [f32; 3]) -> [f32; 3] {
    let yd = luminance(rgb, row);
    if yd <= 0.0 {
        return rgb;
    }
    let gain = yd.powf((1.0 - SYSTEM_GAMMA) / SYSTEM_GAMMA);
    [rgb[0] * gain, rgb[1] * gain, rgb[2] * gain]
}

/// Display peak (cd/m2) at which a 75% HLG signal lands on `diffuse_white`.
///
/// Used when an HLG source carries no luminance tag.
///
/// # Example
///
/// ```rust
/// use hilux_transfer::hlg::peak_luminance;
///
/// let peak = peak_luminance(203);
/// assert!((995..=1005).contains(&peak));
/// ```
pub fn peak_luminance(diffuse_white: u32) -> u32 {
    let relative = eotf(DIFFUSE_WHITE_SIGNAL).powf(SYSTEM_GAMMA);
    (diffuse_white as f32 / relative).round() as u32
}

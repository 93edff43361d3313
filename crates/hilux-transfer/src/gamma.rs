//! Pure power-law transfer functions.
//!
//! - 1.0: Linear (identity, negative values preserved)
//! - 2.2: Legacy CRT approximation, also used for the highlight preview
//! - 2.4: BT.1886 reference EOTF
//!
//! # Range
//!
//! - Input/Output: [0, 1]; non-positive input maps to 0 except for gamma 1.

/// Exponents within this distance of 1 are treated as linear.
const LINEAR_EPSILON: f32 = 1e-6;

/// Returns `true` if `gamma` is (numerically) 1.
#[inline]
pub fn is_linear(gamma: f32) -> bool {
    (gamma - 1.0).abs() < LINEAR_EPSILON
}

/// EOTF for arbitrary gamma: `v^gamma`
///
/// # Example
///
/// ```rust
/// use hilux_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-3);
/// assert_eq!(gamma_eotf(-0.5, 1.0), -0.5);
/// ```
#[inline]
pub fn gamma_eotf(v: f32, gamma: f32) -> f32 {
    if is_linear(gamma) {
        v
    } else if v <= 0.0 {
        0.0
    } else {
        v.powf(gamma)
    }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`
///
/// # Example
///
/// ```rust
/// use hilux_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f32, gamma: f32) -> f32 {
    if is_linear(gamma) {
        l
    } else if l <= 0.0 {
        0.0
    } else {
        l.powf(1.0 / gamma)
    }
}

//! SMPTE ST 2084 Perceptual Quantizer (PQ) transfer function.
//!
//! PQ encodes absolute luminance up to 10,000 cd/m2.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 10000] cd/m2 (nits)
//!
//! # Usage
//!
//! ```rust
//! use hilux_transfer::pq;
//!
//! let signal = pq::oetf(100.0);
//! assert!((signal - 0.508).abs() < 0.01);
//! assert!((pq::eotf(signal) - 100.0).abs() < 0.5);
//! ```

/// Maximum luminance in cd/m2 (nits).
pub const L_MAX: f32 = 10000.0;

// PQ constants from SMPTE ST 2084
const M1: f32 = 2610.0 / 16384.0;
const M2: f32 = 2523.0 / 4096.0 * 128.0;
const C1: f32 = 3424.0 / 4096.0;
const C2: f32 = 2413.0 / 4096.0 * 32.0;
const C3: f32 = 2392.0 / 4096.0 * 32.0;

/// PQ EOTF: Decodes PQ signal to absolute luminance (cd/m2).
#[inline]
pub fn eotf(v: f32) -> f32 {
    L_MAX * eotf_normalized(v)
}

/// PQ OETF: Encodes absolute luminance (cd/m2) to PQ signal.
#[inline]
pub fn oetf(l: f32) -> f32 {
    oetf_normalized(l / L_MAX)
}

/// PQ EOTF normalized so that 1.0 is 10,000 nits.
#[inline]
pub fn eotf_normalized(v: f32) -> f32 {
    if v <= 0.0 {
        return 0.0;
    }

    let vp = v.powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;

    (num / den).powf(1.0 / M1)
}

/// PQ OETF accepting linear light normalized so that 1.0 is 10,000 nits.
#[inline]
pub fn oetf_normalized(y: f32) -> f32 {
    if y <= 0.0 {
        return 0.0;
    }

    let yp = y.min(1.0).powf(M1);
    let num = C1 + C2 * yp;
    let den = 1.0 + C3 * yp;

    (num / den).powf(M2)
}

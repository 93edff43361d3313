//! Scalar pixel math.
//!
//! Float to integer channel conversion and tolerance comparison. All
//! functions are pure.
//!
//! ```rust
//! use hilux_math::pixel::{normalized_round, round_unorm};
//!
//! assert_eq!(normalized_round(0.5, 255.0), 128.0);
//! assert_eq!(round_unorm(1.7, 1), 1);
//! ```

/// Clamps `value` to `[min, max]`, then rounds half away from zero.
#[inline]
pub fn clamp_round(value: f32, min: f32, max: f32) -> f32 {
    value.clamp(min, max).round()
}

/// Rounds into the unsigned normalized range `[0, max_value]`.
///
/// NaN maps to 0.
#[inline]
pub fn round_unorm(value: f32, max_value: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    clamp_round(value, 0.0, max_value as f32) as u32
}

/// Magnitude-free epsilon comparison: `|a - b| < epsilon`.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Clamps `value` into [0, 1], scales by `scale`, then rounds.
///
/// The canonical float to integer channel conversion; `scale` is the
/// largest code value (255 for 8-bit).
#[inline]
pub fn normalized_round(value: f32, scale: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    clamp_round(value * scale, 0.0, scale)
}

/// Converts a normalized value to an 8-bit code value.
///
/// ```rust
/// use hilux_math::to_u8;
///
/// assert_eq!(to_u8(0.5), 128);
/// ```
#[inline]
pub fn to_u8(value: f32) -> u8 {
    normalized_round(value, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_round_half_away_from_zero() {
        assert_eq!(clamp_round(2.5, 0.0, 10.0), 3.0);
        assert_eq!(clamp_round(-2.5, -10.0, 10.0), -3.0);
        assert_eq!(clamp_round(2.49, 0.0, 10.0), 2.0);
        assert_eq!(clamp_round(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_round(-1.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_round_unorm() {
        assert_eq!(round_unorm(127.5, 255), 128);
        assert_eq!(round_unorm(300.0, 255), 255);
        assert_eq!(round_unorm(-4.0, 65535), 0);
        assert_eq!(round_unorm(f32::NAN, 255), 0);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.6, 0.60005, 0.0001));
        assert!(!approx_eq(0.6, 0.6002, 0.0001));
        assert!(approx_eq(-1.0, -1.0, f32::EPSILON));
    }

    #[test]
    fn test_normalized_round() {
        assert_eq!(normalized_round(0.0, 255.0), 0.0);
        assert_eq!(normalized_round(1.0, 255.0), 255.0);
        assert_eq!(normalized_round(2.0, 255.0), 255.0);
        assert_eq!(normalized_round(-0.5, 255.0), 0.0);
        assert_eq!(normalized_round(0.5, 65535.0), 32768.0);
    }

    #[test]
    fn test_to_u8() {
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(0.2), 51);
        assert_eq!(to_u8(f32::NAN), 0);
    }
}

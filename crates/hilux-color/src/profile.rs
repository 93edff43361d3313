//! Color profiles.
//!
//! A [`ColorProfile`] is the minimal description the analysis engine needs:
//! primaries, a transfer curve and the luminance (in nits) that an encoded
//! value of 1.0 represents.
//!
//! # Example
//!
//! ```rust
//! use hilux_color::{ColorProfile, CurveKind, Luminance};
//!
//! let profile = ColorProfile::rec2100_hlg();
//! let (_, curve, luminance) = profile.query();
//! assert_eq!(curve.kind, CurveKind::Hlg);
//! assert_eq!(luminance, Luminance::Unspecified);
//!
//! // Untagged HLG resolves to the peak that puts diffuse white on 80 nits.
//! let (_, _, nits) = profile.resolve(80);
//! assert!(nits > 300);
//! ```

use std::fmt;

use hilux_primaries::{Primaries, REC2020, SRGB};
use hilux_transfer::{gamma, hlg, pq, srgb};

/// Transfer curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Pure power law with [`Curve::gamma`] as exponent.
    Gamma,
    /// IEC 61966-2-1 piecewise sRGB.
    Srgb,
    /// SMPTE ST 2084, normalized so 1.0 is 10,000 nits.
    Pq,
    /// BT.2100 Hybrid Log-Gamma.
    Hlg,
}

impl CurveKind {
    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gamma => "gamma",
            Self::Srgb => "sRGB",
            Self::Pq => "PQ",
            Self::Hlg => "HLG",
        }
    }
}

/// A transfer curve.
///
/// `gamma` is only read for [`CurveKind::Gamma`]. Linear output is
/// multiplied by `implicit_scale`, so a profile peaks at
/// `luminance * implicit_scale` nits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    /// Curve family.
    pub kind: CurveKind,
    /// Exponent of a gamma curve.
    pub gamma: f32,
    /// Multiplier applied to linear output.
    pub implicit_scale: f32,
}

impl Curve {
    /// Power law curve.
    pub const fn gamma(gamma: f32) -> Self {
        Self { kind: CurveKind::Gamma, gamma, implicit_scale: 1.0 }
    }

    /// Identity curve (gamma 1).
    pub const fn linear() -> Self {
        Self::gamma(1.0)
    }

    /// sRGB curve.
    pub const fn srgb() -> Self {
        Self { kind: CurveKind::Srgb, gamma: 2.4, implicit_scale: 1.0 }
    }

    /// PQ curve.
    pub const fn pq() -> Self {
        Self { kind: CurveKind::Pq, gamma: 1.0, implicit_scale: 1.0 }
    }

    /// HLG curve.
    pub const fn hlg() -> Self {
        Self { kind: CurveKind::Hlg, gamma: 1.0, implicit_scale: 1.0 }
    }

    /// Returns the curve with a different implicit scale.
    pub const fn with_implicit_scale(mut self, implicit_scale: f32) -> Self {
        self.implicit_scale = implicit_scale;
        self
    }

    /// Returns `true` for a gamma 1 curve.
    pub fn is_linear(&self) -> bool {
        self.kind == CurveKind::Gamma && gamma::is_linear(self.gamma)
    }

    /// Encoded value to linear light (relative, scaled by `implicit_scale`).
    ///
    /// A gamma 1 curve passes negative values through unchanged.
    #[inline]
    pub fn to_linear(&self, v: f32) -> f32 {
        let linear = match self.kind {
            CurveKind::Gamma => gamma::gamma_eotf(v, self.gamma),
            CurveKind::Srgb => srgb::eotf(v),
            CurveKind::Pq => pq::eotf_normalized(v),
            CurveKind::Hlg => hlg::eotf(v),
        };
        linear * self.implicit_scale
    }

    /// Inverse of [`Curve::to_linear`].
    #[inline]
    pub fn from_linear(&self, l: f32) -> f32 {
        let l = l / self.implicit_scale;
        match self.kind {
            CurveKind::Gamma => gamma::gamma_oetf(l, self.gamma),
            CurveKind::Srgb => srgb::oetf(l),
            CurveKind::Pq => pq::oetf_normalized(l),
            CurveKind::Hlg => hlg::oetf(l),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::srgb()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CurveKind::Gamma => write!(f, "gamma {}", self.gamma)?,
            kind => f.write_str(kind.name())?,
        }
        if self.implicit_scale != 1.0 {
            write!(f, " x{}", self.implicit_scale)?;
        }
        Ok(())
    }
}

/// Luminance of encoded 1.0, as tagged on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Luminance {
    /// Peak luminance in cd/m2.
    Nits(u32),
    /// No luminance tag; callers supply a default.
    #[default]
    Unspecified,
}

impl Luminance {
    /// Tagged nits, if any.
    pub const fn nits(self) -> Option<u32> {
        match self {
            Self::Nits(n) => Some(n),
            Self::Unspecified => None,
        }
    }
}

/// A color profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProfile {
    /// Primaries and white point.
    pub primaries: Primaries,
    /// Transfer curve.
    pub curve: Curve,
    /// Luminance of encoded 1.0.
    pub luminance: Luminance,
    /// Human readable description.
    pub description: String,
}

impl ColorProfile {
    /// Creates a profile with an empty description.
    pub fn new(primaries: Primaries, curve: Curve, luminance: Luminance) -> Self {
        Self { primaries, curve, luminance, description: String::new() }
    }

    /// sRGB primaries and curve at `nits`.
    pub fn srgb(nits: u32) -> Self {
        Self::new(SRGB, Curve::srgb(), Luminance::Nits(nits)).with_description("sRGB")
    }

    /// Linear (gamma 1) profile with the given primaries at `nits`.
    pub fn linear(primaries: Primaries, nits: u32) -> Self {
        Self::new(primaries, Curve::linear(), Luminance::Nits(nits))
            .with_description("Linear")
    }

    /// BT.2100 PQ (Rec.2020 primaries, 10,000 nits).
    pub fn rec2100_pq() -> Self {
        Self::new(REC2020, Curve::pq(), Luminance::Nits(pq::L_MAX as u32))
            .with_description("BT.2100 PQ")
    }

    /// BT.2100 HLG (Rec.2020 primaries, luminance left untagged).
    pub fn rec2100_hlg() -> Self {
        Self::new(REC2020, Curve::hlg(), Luminance::Unspecified)
            .with_description("BT.2100 HLG")
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the luminance tag.
    pub fn with_luminance(mut self, luminance: Luminance) -> Self {
        self.luminance = luminance;
        self
    }

    /// Description, or the curve name when empty.
    pub fn name(&self) -> String {
        if self.description.is_empty() {
            self.curve.to_string()
        } else {
            self.description.clone()
        }
    }

    /// Returns the profile's characteristics as tagged.
    pub fn query(&self) -> (Primaries, Curve, Luminance) {
        (self.primaries, self.curve, self.luminance)
    }

    /// Returns the profile's characteristics with the luminance resolved.
    ///
    /// Untagged HLG profiles resolve to the display peak at which diffuse
    /// white lands on `default_luminance`; every other untagged profile
    /// resolves to `default_luminance`.
    pub fn resolve(&self, default_luminance: u32) -> (Primaries, Curve, u32) {
        let nits = match self.luminance {
            Luminance::Nits(n) => n,
            Luminance::Unspecified if self.curve.kind == CurveKind::Hlg => {
                hlg::peak_luminance(default_luminance)
            }
            Luminance::Unspecified => default_luminance,
        };
        (self.primaries, self.curve, nits)
    }
}

impl Default for ColorProfile {
    fn default() -> Self {
        Self::srgb(80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_query_returns_tags() {
        let profile = ColorProfile::new(REC2020, Curve::pq(), Luminance::Nits(10000));
        let (primaries, curve, luminance) = profile.query();
        assert_eq!(primaries, REC2020);
        assert_eq!(curve.kind, CurveKind::Pq);
        assert_eq!(luminance, Luminance::Nits(10000));
    }

    #[test]
    fn test_resolve_tagged() {
        let (_, _, nits) = ColorProfile::srgb(300).resolve(80);
        assert_eq!(nits, 300);
    }

    #[test]
    fn test_resolve_untagged() {
        let profile = ColorProfile::srgb(0).with_luminance(Luminance::Unspecified);
        assert_eq!(profile.resolve(80).2, 80);
        assert_eq!(profile.resolve(203).2, 203);

        let hlg = ColorProfile::rec2100_hlg();
        assert_eq!(hlg.resolve(80).2, hlg::peak_luminance(80));
    }

    #[test]
    fn test_resolve_tagged_hlg_is_kept() {
        let hlg = ColorProfile::rec2100_hlg().with_luminance(Luminance::Nits(1000));
        assert_eq!(hlg.resolve(80).2, 1000);
    }

    #[test]
    fn test_curve_roundtrip() {
        let curves = [
            Curve::gamma(2.2),
            Curve::srgb(),
            Curve::pq(),
            Curve::hlg(),
            Curve::gamma(2.4).with_implicit_scale(2.0),
        ];
        for curve in curves {
            for i in 1..=10 {
                let v = i as f32 / 10.0;
                let back = curve.from_linear(curve.to_linear(v));
                assert_relative_eq!(v, back, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_linear_curve_keeps_negatives() {
        let curve = Curve::linear();
        assert!(curve.is_linear());
        assert_eq!(curve.to_linear(-0.25), -0.25);
        assert_eq!(curve.from_linear(1.5), 1.5);
    }

    #[test]
    fn test_implicit_scale() {
        let curve = Curve::linear().with_implicit_scale(4.0);
        assert_eq!(curve.to_linear(0.5), 2.0);
        assert_eq!(curve.from_linear(2.0), 0.5);
    }

    #[test]
    fn test_name() {
        assert_eq!(ColorProfile::srgb(80).name(), "sRGB");
        let bare = ColorProfile::new(SRGB, Curve::gamma(2.2), Luminance::Nits(100));
        assert_eq!(bare.name(), "gamma 2.2");
    }
}

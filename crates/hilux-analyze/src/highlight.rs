//! Overbright ratio and false-color preview tinting.

use hilux_math::to_u8;
use hilux_transfer::gamma::gamma_oetf;

use crate::consts::{MIN_HIGHLIGHT, PREVIEW_GAMMA, REASONABLY_OVERBRIGHT};

/// How far `y` exceeds the ceiling `max_y`, normalized by `scale`.
///
/// The result is `(y / max_y - 1) / (scale - 1)` clamped to [0, 1], where
/// `scale` is the image's overbright scale.
/// Returns 0 unless `y / max_y` exceeds `1 + REASONABLY_OVERBRIGHT`.
///
/// ```rust
/// use hilux_analyze::highlight::overbright;
///
/// assert_eq!(overbright(100.0, 2.0, 100.0), 0.0);
/// assert_eq!(overbright(150.0, 2.0, 100.0), 0.5);
/// ```
pub fn overbright(y: f32, scale: f32, max_y: f32) -> f32 {
    let p = y / max_y;
    if p > 1.0 + REASONABLY_OVERBRIGHT {
        ((p - 1.0) / (scale - 1.0)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Highlight class of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    /// Neither overbright nor out of gamut.
    #[default]
    Neither,
    /// Brighter than the target can show.
    Overbright,
    /// Outside the sRGB gamut.
    OutOfGamut,
    /// Both overbright and out of gamut.
    Both,
}

impl Classification {
    /// Classifies a pixel from its overbright and out-of-gamut ratios.
    pub fn new(overbright: f32, out_of_gamut: f32) -> Self {
        match (overbright > 0.0, out_of_gamut > 0.0) {
            (true, true) => Self::Both,
            (true, false) => Self::Overbright,
            (false, true) => Self::OutOfGamut,
            (false, false) => Self::Neither,
        }
    }

    /// Returns `true` for every class but `Neither`.
    pub fn is_hdr(self) -> bool {
        self != Self::Neither
    }
}

/// Pixel counts per highlight class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    /// Overbright and out of gamut.
    pub both: usize,
    /// Overbright only.
    pub overbright: usize,
    /// Out of gamut only.
    pub out_of_gamut: usize,
}

impl ClassCounts {
    /// Counts one pixel.
    pub fn add(mut self, class: Classification) -> Self {
        match class {
            Classification::Both => self.both += 1,
            Classification::Overbright => self.overbright += 1,
            Classification::OutOfGamut => self.out_of_gamut += 1,
            Classification::Neither => {}
        }
        self
    }

    /// Sums two partial counts.
    pub fn merge(self, other: Self) -> Self {
        Self {
            both: self.both + other.both,
            overbright: self.overbright + other.overbright,
            out_of_gamut: self.out_of_gamut + other.out_of_gamut,
        }
    }

    /// Pixels in any highlight class.
    pub fn hdr(&self) -> usize {
        self.both + self.overbright + self.out_of_gamut
    }
}

/// Gamma 2.2 encoded 8-bit intensity of a relative luminance.
#[inline]
pub fn intensity8(v: f32) -> u8 {
    to_u8(gamma_oetf(v, PREVIEW_GAMMA))
}

/// Preview RGBA for a pixel of `nits` on a `target` nit display.
///
/// Highlighted pixels dim one channel: blue for both (yellow), green for
/// overbright (magenta), red for out of gamut (cyan). The stronger ratio
/// sets how far the channel is dimmed.
pub fn tint(
    nits: f32,
    target: f32,
    overbright: f32,
    out_of_gamut: f32,
    class: Classification,
) -> [u8; 4] {
    let base = (nits / target).clamp(0.0, 1.0);
    let full = intensity8(base);
    let strength = MIN_HIGHLIGHT + overbright.max(out_of_gamut) * (1.0 - MIN_HIGHLIGHT);
    let dim = intensity8(base * (1.0 - strength));

    match class {
        Classification::Both => [full, full, dim, 255],
        Classification::Overbright => [full, dim, full, 255],
        Classification::OutOfGamut => [dim, full, full, 255],
        Classification::Neither => [full, full, full, 255],
    }
}

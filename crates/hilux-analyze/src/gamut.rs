//! Out-of-gamut measurement against the sRGB triangle.
//!
//! Distances are signed perpendicular distances in the xy plane from each
//! edge of a primaries triangle, positive outside. Edges are ordered
//! red-green, green-blue, blue-red.

use hilux_math::approx_eq;
use hilux_primaries::{Primaries, SRGB};

use crate::consts::{IN_GAMUT_DISTANCE, ON_EDGE_DISTANCE, RATIO_SNAP, SRGB_GREEN_Y_EPSILON};

/// Signed distance of `(x, y)` from the line through `a` and `b`.
#[inline]
fn edge_distance(x: f32, y: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let length = ((ay - by) * (ay - by) + (ax - bx) * (ax - bx)).sqrt();
    ((x * (by - ay)) - (y * (bx - ax)) + (bx * ay) - (by * ax)) / length
}

/// Signed distances of `(x, y)` from the RG, GB and BR edges.
///
/// # Example
///
/// ```rust
/// use hilux_analyze::gamut::edge_distances;
/// use hilux_primaries::{D65_XY, SRGB};
///
/// let inside = edge_distances(D65_XY.0, D65_XY.1, &SRGB);
/// assert!(inside.iter().all(|d| *d < 0.0));
/// ```
pub fn edge_distances(x: f32, y: f32, primaries: &Primaries) -> [f32; 3] {
    [
        edge_distance(x, y, primaries.red, primaries.green),
        edge_distance(x, y, primaries.green, primaries.blue),
        edge_distance(x, y, primaries.blue, primaries.red),
    ]
}

/// How far `(x, y)` sits beyond sRGB toward the edge of `primaries`.
///
/// 0 inside or on the sRGB triangle, 1 at or beyond the source gamut's
/// edge, the fraction of the way from the sRGB edge to the source edge in
/// between. The comparison axis is the edge with the largest sRGB distance.
pub fn out_of_srgb(x: f32, y: f32, primaries: &Primaries) -> f32 {
    if approx_eq(SRGB.green.1, primaries.green.1, SRGB_GREEN_Y_EPSILON) {
        return 0.0;
    }

    let gamut = edge_distances(x, y, primaries);
    let srgb = edge_distances(x, y, &SRGB);

    let mut srgb_max = srgb[0];
    let mut gamut_max = gamut[0];
    for i in 1..3 {
        if srgb_max <= srgb[i] {
            srgb_max = srgb[i];
            gamut_max = gamut[i];
        }
    }

    if srgb_max < IN_GAMUT_DISTANCE {
        return 0.0;
    }
    if gamut_max >= ON_EDGE_DISTANCE {
        return 1.0;
    }

    let ratio = srgb_max / (srgb_max - gamut_max);
    if ratio >= RATIO_SNAP { 1.0 } else { ratio }
}

//! Aggregate statistics and per-pixel records.

use rayon::prelude::*;
use serde::Serialize;

use crate::highlight::ClassCounts;

/// Aggregate results of a measurement.
///
/// `hdr_pixel_count` is always `both + overbright + out_of_gamut`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HdrStats {
    /// Pixels measured.
    pub pixel_count: usize,
    /// Nits of the brightest pixel (0 if no pixel is brighter than 0).
    pub brightest_pixel_nits: f32,
    /// Column of the brightest pixel.
    pub brightest_pixel_x: u32,
    /// Row of the brightest pixel.
    pub brightest_pixel_y: u32,
    /// Pixels both overbright and out of gamut.
    pub both_pixel_count: usize,
    /// Pixels only overbright.
    pub overbright_pixel_count: usize,
    /// Pixels only out of gamut.
    pub out_of_gamut_pixel_count: usize,
    /// Pixels in any highlight class.
    pub hdr_pixel_count: usize,
}

impl HdrStats {
    pub(crate) fn new(
        pixel_count: usize,
        width: u32,
        brightest: Option<Brightest>,
        counts: ClassCounts,
    ) -> Self {
        let width = width as usize;
        let (nits, x, y) = match brightest {
            Some(b) => (b.nits, (b.index % width) as u32, (b.index / width) as u32),
            None => (0.0, 0, 0),
        };
        Self {
            pixel_count,
            brightest_pixel_nits: nits,
            brightest_pixel_x: x,
            brightest_pixel_y: y,
            both_pixel_count: counts.both,
            overbright_pixel_count: counts.overbright,
            out_of_gamut_pixel_count: counts.out_of_gamut,
            hdr_pixel_count: counts.hdr(),
        }
    }
}

/// Measurement of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PixelRecord {
    /// Chromaticity x.
    pub x: f32,
    /// Chromaticity y.
    pub y: f32,
    /// Luminance relative to the source's peak.
    pub luminance: f32,
    /// Measured nits.
    pub nits: f32,
    /// Luminance ceiling at this chromaticity on the target display.
    pub max_nits: f32,
    /// Out-of-gamut ratio.
    pub out_of_gamut: f32,
}

/// Candidate for the brightest pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Brightest {
    pub nits: f32,
    pub index: usize,
}

impl Brightest {
    /// Keeps the brighter candidate, the lower index on ties.
    fn pick(a: Self, b: Self) -> Self {
        if b.nits > a.nits || (b.nits == a.nits && b.index < a.index) {
            b
        } else {
            a
        }
    }

    /// Brightest value above 0, lowest index on ties. NaN never wins.
    pub fn find(nits: impl IndexedParallelIterator<Item = f32>) -> Option<Self> {
        nits.enumerate()
            .filter(|&(_, n)| n > 0.0)
            .map(|(index, nits)| Self { nits, index })
            .reduce_with(Self::pick)
    }
}

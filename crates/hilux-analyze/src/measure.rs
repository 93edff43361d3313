//! The HDR measurement pass.

use hilux_color::{luminance_ceiling, ColorProfile, Endpoint, ToneMap, Transform};
use hilux_core::{try_alloc, PixelBuffer, PixelLayout, PreviewImage};
use hilux_math::{xyz_to_xyy, Vec3, Xyy};
use hilux_primaries::Primaries;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::gamut::out_of_srgb;
use crate::highlight::{self, ClassCounts, Classification};
use crate::stats::Brightest;
use crate::{
    HdrStats, HighlightConfig, MeasureError, MeasureResult, Outputs, PercentileTable, PixelRecord,
};

/// Results of [`measure_hdr`]. Exactly the requested outputs are `Some`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurement {
    /// False-color preview.
    pub image: Option<PreviewImage>,
    /// Aggregate statistics.
    pub stats: Option<HdrStats>,
    /// One record per pixel, row-major.
    pub pixel_info: Option<Vec<PixelRecord>>,
    /// Percentile table.
    pub percentiles: Option<PercentileTable>,
}

/// Per-pixel scratch evaluation.
#[derive(Debug, Clone, Copy, Default)]
struct PixelEval {
    xyy: Xyy,
    max_nits: f32,
    overbright: f32,
    out_of_gamut: f32,
    class: Classification,
}

impl PixelEval {
    #[inline]
    fn nits(&self) -> f32 {
        self.xyy.big_y
    }
}

/// Everything a pixel evaluation reads.
struct Evaluator<'a> {
    primaries: Primaries,
    target: f32,
    overbright_scale: f32,
    /// Linear 1-nit transforms for the ceiling; `None` skips overbright.
    ceiling: Option<(&'a Transform, &'a Transform)>,
}

impl Evaluator<'_> {
    fn evaluate(&self, xyz: &[f32]) -> PixelEval {
        let xyy = xyz_to_xyy(Vec3::from_slice(xyz), self.primaries.white);

        let (max_nits, overbright) = match self.ceiling {
            Some((to_xyz, from_xyz)) => {
                let max_nits = luminance_ceiling(to_xyz, from_xyz, xyy.x, xyy.y) * self.target;
                (max_nits, highlight::overbright(xyy.big_y, self.overbright_scale, max_nits))
            }
            None => (0.0, 0.0),
        };
        let out_of_gamut = out_of_srgb(xyy.x, xyy.y, &self.primaries);

        PixelEval {
            xyy,
            max_nits,
            overbright,
            out_of_gamut,
            class: Classification::new(overbright, out_of_gamut),
        }
    }
}

/// Measures how far `image` exceeds a target display.
///
/// Converts the image to absolute XYZ once, then judges every pixel for
/// overbright (brighter than the target can show at its chromaticity) and
/// out of gamut (outside sRGB). Only the `outputs` requested are computed.
///
/// # Errors
///
/// - [`MeasureError::InvalidConfig`] for a zero target luminance
/// - [`MeasureError::Image`] for a non-RGB buffer
/// - [`MeasureError::Construction`] if a transform cannot be built
/// - [`MeasureError::Resource`] if scratch storage cannot be allocated
///
/// # Example
///
/// ```rust
/// use hilux_analyze::{measure_hdr, HighlightConfig, Outputs};
/// use hilux_color::ColorProfile;
/// use hilux_core::{PixelBuffer, PixelLayout};
///
/// let image = PixelBuffer::from_data(1, 1, PixelLayout::Rgb, vec![1.0; 3]).unwrap();
/// let profile = ColorProfile::srgb(100);
/// let config = HighlightConfig::new(300);
/// let result = measure_hdr(&image, &profile, &config, Outputs::none().with_stats()).unwrap();
///
/// let stats = result.stats.unwrap();
/// assert_eq!(stats.pixel_count, 1);
/// assert_eq!(stats.hdr_pixel_count, 0);
/// assert!(result.image.is_none());
/// ```
pub fn measure_hdr(
    image: &PixelBuffer,
    profile: &ColorProfile,
    config: &HighlightConfig,
    outputs: Outputs,
) -> MeasureResult<Measurement> {
    config.validate()?;
    let layout = image.layout();
    if !layout.is_rgb() {
        return Err(MeasureError::Image(format!("expected RGB or RGBA pixels, got {}", layout)));
    }
    if outputs.is_empty() {
        debug!("no outputs requested");
        return Ok(Measurement::default());
    }

    let (width, height) = (image.width(), image.height());
    let pixel_count = image.pixel_count();
    let target = config.target_luminance as f32;
    let (primaries, curve, source_luminance) = profile.resolve(config.default_luminance);

    debug!(width, height, target, source_luminance, ?outputs, "measuring HDR");

    let to_xyz = Transform::build_with_default(
        &Endpoint::profile(profile.clone(), layout),
        &Endpoint::Xyz,
        ToneMap::Off,
        config.default_luminance,
    )?;
    let linear = Endpoint::profile(ColorProfile::linear(primaries, 1), PixelLayout::Rgb);
    let linear_to_xyz = Transform::build(&linear, &Endpoint::Xyz, ToneMap::Off)?;
    let linear_from_xyz = Transform::build(&Endpoint::Xyz, &linear, ToneMap::Off)?;

    let mut xyz = try_alloc(pixel_count * 3, 0.0f32)?;
    to_xyz.run(image.data(), &mut xyz, pixel_count)?;

    let measured_peak = xyz.par_chunks_exact(3).map(|p| p[1]).reduce(|| 0.0, f32::max);
    let overbright_scale = measured_peak * curve.implicit_scale / target;
    trace!(measured_peak, overbright_scale, "peak scan");

    let evaluator = Evaluator {
        primaries,
        target,
        overbright_scale,
        ceiling: outputs
            .needs_overbright()
            .then_some((&linear_to_xyz, &linear_from_xyz)),
    };
    let mut evals = try_alloc(pixel_count, PixelEval::default())?;
    evals
        .par_iter_mut()
        .zip(xyz.par_chunks_exact(3))
        .for_each(|(slot, p)| *slot = evaluator.evaluate(p));
    drop(xyz);

    let counts = outputs.needs_counts().then(|| {
        evals
            .par_iter()
            .fold(ClassCounts::default, |acc, e| acc.add(e.class))
            .reduce(ClassCounts::default, ClassCounts::merge)
    });

    let mut measurement = Measurement::default();

    if outputs.stats {
        let brightest = Brightest::find(evals.par_iter().map(PixelEval::nits));
        measurement.stats = Some(HdrStats::new(
            pixel_count,
            width,
            brightest,
            counts.unwrap_or_default(),
        ));
    }

    if outputs.image {
        let mut preview = PreviewImage::new(width, height)?;
        preview
            .data_mut()
            .par_chunks_exact_mut(PreviewImage::CHANNELS)
            .zip(evals.par_iter())
            .for_each(|(px, e)| {
                let rgba = highlight::tint(e.nits(), target, e.overbright, e.out_of_gamut, e.class);
                px.copy_from_slice(&rgba);
            });
        measurement.image = Some(preview);
    }

    if outputs.pixel_info {
        let relative_scale = source_luminance as f32 * curve.implicit_scale;
        let mut records = try_alloc(pixel_count, PixelRecord::default())?;
        records.par_iter_mut().zip(evals.par_iter()).for_each(|(r, e)| {
            *r = PixelRecord {
                x: e.xyy.x,
                y: e.xyy.y,
                luminance: e.nits() / relative_scale,
                nits: e.nits(),
                max_nits: e.max_nits,
                out_of_gamut: e.out_of_gamut,
            };
        });
        measurement.pixel_info = Some(records);
    }

    if outputs.percentiles {
        let mut gamut = try_alloc(pixel_count, 0.0f32)?;
        let mut nits = try_alloc(pixel_count, 0.0f32)?;
        gamut
            .par_iter_mut()
            .zip(nits.par_iter_mut())
            .zip(evals.par_iter())
            .for_each(|((g, n), e)| {
                *g = e.out_of_gamut;
                *n = e.nits();
            });
        measurement.percentiles = PercentileTable::from_unsorted(&mut gamut, &mut nits);
    }

    if let Some(counts) = counts {
        debug!(
            both = counts.both,
            overbright = counts.overbright,
            out_of_gamut = counts.out_of_gamut,
            "measurement complete"
        );
    } else {
        debug!(pixel_count, "measurement complete");
    }

    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hilux_color::{Curve, Luminance};
    use hilux_primaries::{D65_XY, REC2020, SRGB};

    fn linear_srgb(nits: u32) -> ColorProfile {
        ColorProfile::linear(SRGB, nits)
    }

    /// Pixel 0 at half the target, pixel 1 at 1.5x the target, both white.
    fn two_pixel_scene() -> (PixelBuffer, ColorProfile, HighlightConfig) {
        let data = vec![0.5, 0.5, 0.5, 1.5, 1.5, 1.5];
        let image = PixelBuffer::from_data(2, 1, PixelLayout::Rgb, data).unwrap();
        (image, linear_srgb(300), HighlightConfig::new(300))
    }

    #[test]
    fn test_two_pixel_scene() {
        let (image, profile, config) = two_pixel_scene();
        let m = measure_hdr(&image, &profile, &config, Outputs::all()).unwrap();

        let stats = m.stats.unwrap();
        assert_eq!(stats.pixel_count, 2);
        assert_eq!(stats.overbright_pixel_count, 1);
        assert_eq!(stats.out_of_gamut_pixel_count, 0);
        assert_eq!(stats.both_pixel_count, 0);
        assert_eq!(stats.hdr_pixel_count, 1);
        assert_eq!((stats.brightest_pixel_x, stats.brightest_pixel_y), (1, 0));
        assert_relative_eq!(stats.brightest_pixel_nits, 450.0, epsilon = 0.1);

        let preview = m.image.unwrap();
        assert_eq!(preview.pixel(1, 0), [255, 0, 255, 255]);
        let [r, g, b, a] = preview.pixel(0, 0);
        assert!(r == g && g == b && a == 255);

        let table = m.percentiles.unwrap();
        let info = m.pixel_info.unwrap();
        assert_eq!(table[100].nits, info[1].nits);
        assert_eq!(table[0].nits, info[0].nits);

        assert_relative_eq!(info[1].max_nits, 300.0, epsilon = 0.1);
        assert_relative_eq!(info[1].luminance, 1.5, epsilon = 1e-3);
        assert_relative_eq!(info[0].x, D65_XY.0, epsilon = 1e-4);
        assert_relative_eq!(info[0].y, D65_XY.1, epsilon = 1e-4);
    }

    #[test]
    fn test_empty_outputs() {
        let (image, profile, config) = two_pixel_scene();
        let m = measure_hdr(&image, &profile, &config, Outputs::none()).unwrap();
        assert_eq!(m, Measurement::default());
    }

    #[test]
    fn test_only_requested_outputs() {
        let (image, profile, config) = two_pixel_scene();
        let m = measure_hdr(&image, &profile, &config, Outputs::none().with_percentiles()).unwrap();
        assert!(m.percentiles.is_some());
        assert!(m.image.is_none() && m.stats.is_none() && m.pixel_info.is_none());

        let m = measure_hdr(&image, &profile, &config, Outputs::none().with_image()).unwrap();
        assert!(m.image.is_some());
        assert!(m.stats.is_none() && m.pixel_info.is_none() && m.percentiles.is_none());
    }

    #[test]
    fn test_zero_target_rejected() {
        let (image, profile, _) = two_pixel_scene();
        let config = HighlightConfig::new(0);
        let err = measure_hdr(&image, &profile, &config, Outputs::all()).unwrap_err();
        assert!(matches!(err, MeasureError::InvalidConfig(_)));
    }

    #[test]
    fn test_xyz_image_rejected() {
        let image = PixelBuffer::from_data(1, 1, PixelLayout::Xyz, vec![0.0; 3]).unwrap();
        let config = HighlightConfig::default();
        let err = measure_hdr(&image, &linear_srgb(100), &config, Outputs::all()).unwrap_err();
        assert!(matches!(err, MeasureError::Image(_)));
    }

    #[test]
    fn test_bad_profile_is_construction_error() {
        let image = PixelBuffer::from_data(1, 1, PixelLayout::Rgb, vec![0.5; 3]).unwrap();
        let profile = ColorProfile::new(SRGB, Curve::gamma(-1.0), Luminance::Nits(100));
        let config = HighlightConfig::default();
        let err = measure_hdr(&image, &profile, &config, Outputs::all()).unwrap_err();
        assert!(matches!(err, MeasureError::Construction(_)));
    }

    #[test]
    fn test_srgb_never_out_of_gamut() {
        let data: Vec<f32> = (0..64 * 3).map(|i| (i % 17) as f32 / 16.0).collect();
        let image = PixelBuffer::from_data(8, 8, PixelLayout::Rgb, data).unwrap();
        let config = HighlightConfig::new(300);
        let m = measure_hdr(&image, &ColorProfile::srgb(300), &config, Outputs::all()).unwrap();

        assert!(m.pixel_info.unwrap().iter().all(|r| r.out_of_gamut == 0.0));
        let stats = m.stats.unwrap();
        assert_eq!(stats.out_of_gamut_pixel_count, 0);
        assert_eq!(stats.both_pixel_count, 0);
    }

    #[test]
    fn test_wide_gamut_green() {
        // Pure Rec.2020 green, bright, next to a dim gray.
        let data = vec![0.0, 1.0, 0.0, 1.0, 0.2, 0.2, 0.2, 1.0];
        let image = PixelBuffer::from_data(2, 1, PixelLayout::Rgba, data).unwrap();
        let profile = ColorProfile::linear(REC2020, 1000);
        let m = measure_hdr(&image, &profile, &HighlightConfig::new(100), Outputs::all()).unwrap();

        let info = m.pixel_info.unwrap();
        assert_eq!(info[0].out_of_gamut, 1.0);
        assert_eq!(info[1].out_of_gamut, 0.0);

        let stats = m.stats.unwrap();
        assert_eq!(stats.both_pixel_count, 1);
        assert_eq!(stats.overbright_pixel_count, 1);
        assert_eq!(stats.hdr_pixel_count, 2);

        let preview = m.image.unwrap();
        assert_eq!(preview.pixel(0, 0)[2], 0);
    }

    #[test]
    fn test_black_pixels_use_white_point() {
        let image = PixelBuffer::from_data(1, 1, PixelLayout::Rgb, vec![0.0; 3]).unwrap();
        let config = HighlightConfig::default();
        let m = measure_hdr(&image, &linear_srgb(100), &config, Outputs::all()).unwrap();

        let record = m.pixel_info.unwrap()[0];
        assert_eq!((record.x, record.y, record.nits), (SRGB.white.0, SRGB.white.1, 0.0));

        let stats = m.stats.unwrap();
        assert_eq!(stats.brightest_pixel_nits, 0.0);
        assert_eq!(stats.hdr_pixel_count, 0);
        assert_eq!(m.image.unwrap().pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_untagged_source_uses_default_luminance() {
        let image = PixelBuffer::from_data(1, 1, PixelLayout::Rgb, vec![1.0; 3]).unwrap();
        let profile = linear_srgb(1).with_luminance(Luminance::Unspecified);
        let config = HighlightConfig::new(300).with_default_luminance(203);
        let m = measure_hdr(&image, &profile, &config, Outputs::none().with_pixel_info()).unwrap();

        let record = m.pixel_info.unwrap()[0];
        assert_relative_eq!(record.nits, 203.0, epsilon = 0.05);
        assert_relative_eq!(record.luminance, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_pixel_info_without_stats_still_computes_ceiling() {
        let (image, profile, config) = two_pixel_scene();
        let m = measure_hdr(&image, &profile, &config, Outputs::none().with_pixel_info()).unwrap();
        assert!(m.pixel_info.unwrap().iter().all(|r| r.max_nits > 0.0));
    }
}

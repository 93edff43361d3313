//! Transforms between color profiles and the absolute XYZ hub.
//!
//! The hub is CIE XYZ with Y in cd/m2 (nits). Each profile endpoint is
//! reduced to its curve, its RGB/XYZ matrices and the nits of
//! encoded 1.0.
//!
//! ```text
//! decode: rgb -> curve.to_linear -> (HLG OOTF) -> M(rgb->xyz) -> x nits
//! encode: / nits -> M(xyz->rgb) -> (inverse HLG OOTF) -> curve.from_linear
//! ```
//!
//! Float transforms never clamp.
//!
//! # Example
//!
//! ```rust
//! use hilux_color::{ColorProfile, Endpoint, ToneMap, Transform};
//! use hilux_core::PixelLayout;
//!
//! let src = Endpoint::profile(ColorProfile::srgb(100), PixelLayout::Rgb);
//! let to_xyz = Transform::build(&src, &Endpoint::Xyz, ToneMap::Off).unwrap();
//!
//! let mut xyz = [0.0f32; 3];
//! to_xyz.run(&[1.0, 1.0, 1.0], &mut xyz, 1).unwrap();
//! assert!((xyz[1] - 100.0).abs() < 0.01);
//! ```

use hilux_core::PixelLayout;
use hilux_math::{Mat3, Vec3};
use hilux_primaries::{rgb_to_xyz_matrix, xyz_to_rgb_matrix};
use hilux_transfer::hlg;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::profile::{ColorProfile, Curve, CurveKind};
use crate::{ColorError, ColorResult};

/// Default luminance for endpoints without a luminance tag.
pub const DEFAULT_LUMINANCE: u32 = 80;

/// Pixels converted per rayon task.
const CHUNK_PIXELS: usize = 4096;

/// One side of a transform.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// RGB pixels in a color profile. `layout` must be `Rgb` or `Rgba`.
    Profile {
        /// Color profile of the pixels.
        profile: ColorProfile,
        /// Sample layout.
        layout: PixelLayout,
    },
    /// Absolute XYZ, Y in nits, 3 channels.
    Xyz,
}

impl Endpoint {
    /// Profile endpoint.
    pub fn profile(profile: ColorProfile, layout: PixelLayout) -> Self {
        Self::Profile { profile, layout }
    }

    /// Samples per pixel.
    pub fn channels(&self) -> usize {
        match self {
            Self::Profile { layout, .. } => layout.channels(),
            Self::Xyz => PixelLayout::Xyz.channels(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Profile { profile, layout } => format!("{} ({})", profile.name(), layout),
            Self::Xyz => "XYZ".to_string(),
        }
    }
}

/// Tone mapping mode.
///
/// Compression is not implemented: `On` is rejected at build time and
/// `Auto` never engages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneMap {
    /// No tone mapping.
    #[default]
    Off,
    /// Tone map only when needed.
    Auto,
    /// Always tone map.
    On,
}

/// Per-profile conversion state.
#[derive(Debug, Clone, Copy)]
struct Codec {
    curve: Curve,
    to_xyz: Mat3,
    from_xyz: Mat3,
    nits: f32,
    /// Luminance weights for the HLG OOTF.
    luma: [f32; 3],
    hlg: bool,
}

impl Codec {
    fn new(profile: &ColorProfile, default_luminance: u32) -> ColorResult<Self> {
        let (primaries, curve, nits) = profile.resolve(default_luminance);

        if primaries.is_degenerate() {
            return Err(ColorError::construction(format!(
                "{}: primaries do not form a triangle",
                profile.name()
            )));
        }
        if nits == 0 {
            return Err(ColorError::construction(format!("{}: luminance is 0", profile.name())));
        }
        if curve.kind == CurveKind::Gamma && (curve.gamma.is_nan() || curve.gamma <= 0.0) {
            return Err(ColorError::construction(format!(
                "{}: gamma must be > 0, got {}",
                profile.name(),
                curve.gamma
            )));
        }
        if curve.implicit_scale.is_nan() || curve.implicit_scale <= 0.0 {
            return Err(ColorError::construction(format!(
                "{}: implicit scale must be > 0, got {}",
                profile.name(),
                curve.implicit_scale
            )));
        }

        let to_xyz = rgb_to_xyz_matrix(&primaries)
            .ok_or_else(|| ColorError::construction("singular RGB to XYZ matrix"))?;
        let from_xyz = xyz_to_rgb_matrix(&primaries)
            .ok_or_else(|| ColorError::construction("singular XYZ to RGB matrix"))?;

        Ok(Self {
            curve,
            to_xyz,
            from_xyz,
            nits: nits as f32,
            luma: to_xyz.row(1).to_array(),
            hlg: curve.kind == CurveKind::Hlg,
        })
    }

    #[inline]
    fn decode(&self, rgb: Vec3) -> Vec3 {
        let mut linear = rgb.map(|v| self.curve.to_linear(v));
        if self.hlg {
            linear = Vec3::from_array(hlg::ootf(linear.to_array(), self.luma));
        }
        (self.to_xyz * linear) * self.nits
    }

    #[inline]
    fn encode(&self, xyz: Vec3) -> Vec3 {
        let mut linear = self.from_xyz * (xyz / self.nits);
        if self.hlg {
            linear = Vec3::from_array(hlg::inverse_ootf(linear.to_array(), self.luma));
        }
        linear.map(|l| self.curve.from_linear(l))
    }
}

/// An immutable, reusable pixel transform.
///
/// Owns no pixel data and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Transform {
    src: Option<Codec>,
    dst: Option<Codec>,
    src_channels: usize,
    dst_channels: usize,
    tone_map: ToneMap,
}

impl Transform {
    /// Builds a transform, resolving untagged luminance with
    /// [`DEFAULT_LUMINANCE`].
    pub fn build(src: &Endpoint, dst: &Endpoint, tone_map: ToneMap) -> ColorResult<Self> {
        Self::build_with_default(src, dst, tone_map, DEFAULT_LUMINANCE)
    }

    /// Builds a transform, resolving untagged luminance with
    /// `default_luminance`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Construction`] when both ends are XYZ, a profile end
    /// uses the `Xyz` layout, a profile is unusable (degenerate primaries,
    /// zero luminance, non-positive gamma or implicit scale) or tone
    /// mapping is forced on.
    pub fn build_with_default(
        src: &Endpoint,
        dst: &Endpoint,
        tone_map: ToneMap,
        default_luminance: u32,
    ) -> ColorResult<Self> {
        debug!(src = %src.describe(), dst = %dst.describe(), ?tone_map, "building transform");

        if tone_map == ToneMap::On {
            return Err(ColorError::construction("tone mapping is not supported"));
        }
        if matches!((src, dst), (Endpoint::Xyz, Endpoint::Xyz)) {
            return Err(ColorError::construction("XYZ to XYZ is not a supported mapping"));
        }

        Ok(Self {
            src: Self::codec(src, default_luminance)?,
            dst: Self::codec(dst, default_luminance)?,
            src_channels: src.channels(),
            dst_channels: dst.channels(),
            tone_map,
        })
    }

    fn codec(endpoint: &Endpoint, default_luminance: u32) -> ColorResult<Option<Codec>> {
        match endpoint {
            Endpoint::Xyz => Ok(None),
            Endpoint::Profile { layout, .. } if !layout.is_rgb() => Err(ColorError::construction(
                format!("profile endpoint needs an RGB layout, got {}", layout),
            )),
            Endpoint::Profile { profile, .. } => Codec::new(profile, default_luminance).map(Some),
        }
    }

    /// Samples per source pixel.
    pub fn src_channels(&self) -> usize {
        self.src_channels
    }

    /// Samples per destination pixel.
    pub fn dst_channels(&self) -> usize {
        self.dst_channels
    }

    /// Tone mapping mode the transform was built with.
    pub fn tone_map(&self) -> ToneMap {
        self.tone_map
    }

    /// Converts one color triplet, ignoring alpha.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let xyz = match &self.src {
            Some(codec) => codec.decode(v),
            None => v,
        };
        match &self.dst {
            Some(codec) => codec.encode(xyz),
            None => xyz,
        }
    }

    #[inline]
    fn convert(&self, src: &[f32], dst: &mut [f32]) {
        let out = self.apply(Vec3::from_slice(src));
        dst[..3].copy_from_slice(&out.to_array());
        if self.dst_channels == 4 {
            dst[3] = if self.src_channels == 4 { src[3] } else { 1.0 };
        }
    }

    /// Converts a single pixel.
    pub fn convert_pixel(&self, src: &[f32], dst: &mut [f32]) -> ColorResult<()> {
        self.run(src, dst, 1)
    }

    /// Converts `pixel_count` pixels from `src` into `dst`.
    ///
    /// Both slice lengths are checked before anything is written.
    pub fn run(&self, src: &[f32], dst: &mut [f32], pixel_count: usize) -> ColorResult<()> {
        let src_len = pixel_count * self.src_channels;
        let dst_len = pixel_count * self.dst_channels;
        if src.len() < src_len {
            return Err(ColorError::BufferSize { expected: src_len, got: src.len() });
        }
        if dst.len() < dst_len {
            return Err(ColorError::BufferSize { expected: dst_len, got: dst.len() });
        }

        trace!(
            pixel_count,
            src_channels = self.src_channels,
            dst_channels = self.dst_channels,
            "running transform"
        );

        let (sc, dc) = (self.src_channels, self.dst_channels);
        dst[..dst_len]
            .par_chunks_mut(dc * CHUNK_PIXELS)
            .zip(src[..src_len].par_chunks(sc * CHUNK_PIXELS))
            .for_each(|(d, s)| {
                for (dp, sp) in d.chunks_exact_mut(dc).zip(s.chunks_exact(sc)) {
                    self.convert(sp, dp);
                }
            });

        Ok(())
    }
}

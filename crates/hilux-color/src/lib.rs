//! # hilux-color
//!
//! Color profiles and transforms through an absolute XYZ hub.
//!
//! - [`ColorProfile`] - primaries, transfer [`Curve`] and [`Luminance`]
//! - [`Transform`] - immutable, thread-safe profile/XYZ converter
//! - [`luminance_ceiling`] - brightest displayable Y for a chromaticity
//!
//! # Pipeline
//!
//! ```text
//! Profile A --decode--> XYZ (Y in nits) --encode--> Profile B
//! ```
//!
//! Either side may be the XYZ hub itself, but not both.
//!
//! # Usage
//!
//! ```rust
//! use hilux_color::prelude::*;
//! use hilux_core::PixelLayout;
//!
//! let pq = Endpoint::profile(ColorProfile::rec2100_pq(), PixelLayout::Rgb);
//! let to_xyz = Transform::build(&pq, &Endpoint::Xyz, ToneMap::Off).unwrap();
//!
//! let mut xyz = [0.0f32; 3];
//! to_xyz.convert_pixel(&[0.5, 0.5, 0.5], &mut xyz).unwrap();
//! assert!(xyz[1] > 90.0 && xyz[1] < 95.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ceiling;
mod error;
mod profile;
mod transform;

pub use ceiling::luminance_ceiling;
pub use error::{ColorError, ColorResult};
pub use profile::{ColorProfile, Curve, CurveKind, Luminance};
pub use transform::{DEFAULT_LUMINANCE, Endpoint, ToneMap, Transform};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        luminance_ceiling, ColorError, ColorProfile, ColorResult, Curve, CurveKind, Endpoint,
        Luminance, ToneMap, Transform,
    };
}

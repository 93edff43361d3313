//! # hilux-analyze
//!
//! HDR highlight measurement.
//!
//! Given an RGB image and its [`ColorProfile`](hilux_color::ColorProfile),
//! [`measure_hdr`] reports which pixels a target display cannot reproduce:
//!
//! - **Overbright**: brighter than the target's luminance ceiling at the
//!   pixel's chromaticity
//! - **Out of gamut**: chromaticity outside the sRGB triangle
//!
//! Results are opt-in through [`Outputs`]: a false-color preview, aggregate
//! [`HdrStats`], per-pixel [`PixelRecord`]s and a [`PercentileTable`].
//!
//! # Preview Colors
//!
//! | Class | Tint |
//! |-------|------|
//! | Overbright and out of gamut | Yellow |
//! | Overbright | Magenta |
//! | Out of gamut | Cyan |
//! | Neither | Gray |
//!
//! # Usage
//!
//! ```rust
//! use hilux_analyze::{measure_hdr, HighlightConfig, Outputs};
//! use hilux_color::ColorProfile;
//! use hilux_core::{PixelBuffer, PixelLayout};
//!
//! let data = vec![0.0, 1.0, 0.0, 0.2, 0.2, 0.2];
//! let image = PixelBuffer::from_data(2, 1, PixelLayout::Rgb, data).unwrap();
//! let profile = ColorProfile::rec2100_pq();
//!
//! let config = HighlightConfig::default();
//! let result = measure_hdr(&image, &profile, &config, Outputs::all()).unwrap();
//! let stats = result.stats.unwrap();
//! let classified =
//!     stats.both_pixel_count + stats.overbright_pixel_count + stats.out_of_gamut_pixel_count;
//! assert_eq!(stats.hdr_pixel_count, classified);
//! assert_eq!(result.percentiles.unwrap().len(), 101);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod consts;
pub mod error;
pub mod gamut;
pub mod highlight;
pub mod measure;
pub mod outputs;
pub mod percentile;
pub mod stats;

pub use config::{ConfigError, HighlightConfig};
pub use error::{MeasureError, MeasureResult};
pub use highlight::Classification;
pub use measure::{measure_hdr, Measurement};
pub use outputs::Outputs;
pub use percentile::{Percentile, PercentileTable};
pub use stats::{HdrStats, PixelRecord};

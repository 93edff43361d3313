//! # hilux-math
//!
//! Math primitives for color-managed HDR analysis:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ conversions
//! - [`Vec3`] - RGB/XYZ triplets
//! - [`pixel`] - Clamped rounding and epsilon comparison for channel conversion
//! - [`chroma`] - XYZ <-> xyY conversion
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Matrix inversion is delegated to [`glam`].
//!
//! # Usage
//!
//! ```rust
//! use hilux_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
pub mod chroma;
pub mod pixel;

pub use chroma::{xyy_to_xyz, xyz_to_xyy, Xyy};
pub use mat3::*;
pub use pixel::{approx_eq, clamp_round, normalized_round, round_unorm, to_u8};
pub use vec3::*;

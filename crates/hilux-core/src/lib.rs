//! # hilux-core
//!
//! Core types shared by every hilux crate.
//!
//! - [`PixelBuffer`] - Row-major `f32` pixel storage tagged with a [`PixelLayout`]
//! - [`PreviewImage`] - 8-bit RGBA output image
//! - [`Error`] / [`Result`] - Buffer and allocation errors
//! - [`try_alloc`] - Fallible scratch allocation
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other hilux crates depend on it:
//!
//! ```text
//! hilux-core (this crate)
//!    ^
//!    |
//!    +-- hilux-math (vectors, matrices, pixel math)
//!    +-- hilux-color (profiles, transforms)
//!    +-- hilux-analyze (HDR measurement)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod layout;

pub use buffer::{try_alloc, PixelBuffer, PreviewImage};
pub use error::{Error, Result};
pub use layout::PixelLayout;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::buffer::{try_alloc, PixelBuffer, PreviewImage};
    pub use crate::error::{Error, Result};
    pub use crate::layout::PixelLayout;
}

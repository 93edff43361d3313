//! # hilux-transfer
//!
//! Transfer functions (OETF/EOTF) used by hilux color profiles.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OOTF** (Opto-Optical Transfer Function): Scene linear -> Display linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Linear Range |
//! |----------|----------|--------------|
//! | [`gamma`] | Pure power law, gamma 1 for linear | [0, 1] |
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//! | [`pq`] | HDR10 (SMPTE ST 2084) | [0, 10000] cd/m2 |
//! | [`hlg`] | HDR broadcast (BT.2100 HLG) | [0, 1] scene |
//!
//! # Usage
//!
//! ```rust
//! use hilux_transfer::{srgb, pq};
//!
//! let linear = srgb::eotf(0.5);
//! assert!((srgb::oetf(linear) - 0.5).abs() < 1e-5);
//!
//! let nits = pq::eotf(0.5);
//! assert!(nits > 90.0 && nits < 95.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod hlg;
pub mod pq;
pub mod srgb;

pub use gamma::{gamma_eotf, gamma_oetf};
pub use hlg::{eotf as hlg_eotf, oetf as hlg_oetf};
pub use pq::{eotf as pq_eotf, oetf as pq_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};

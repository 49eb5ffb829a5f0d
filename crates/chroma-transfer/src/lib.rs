//! # chroma-transfer
//!
//! Companding curves for RGB working spaces.
//!
//! Companding converts between linear light and the non-linear encoded
//! values a working space stores.
//!
//! # Terminology
//!
//! - **Expand**: Encoded -> Linear (decoding, "inverse companding")
//! - **Compress**: Linear -> Encoded (encoding, "companding")
//! - **Gamma**: The exponent in a power-law curve
//!
//! # Supported Curves
//!
//! | Module | Used By |
//! |--------|---------|
//! | [`srgb`] | sRGB |
//! | [`gamma`] | Adobe RGB, Apple sRGB, ProPhoto and other legacy spaces |
//! | [`lstar`] | eciRGB v2 |
//! | [`rec709`] | Rec.709 |
//! | [`rec2020`] | Rec.2020 |
//!
//! [`Companding`] selects one of them at run time.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::{srgb, Companding};
//!
//! let linear = srgb::expand(0.5);
//! let encoded = Companding::Srgb.compress(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//! ```
//!
//! # Range
//!
//! Nominal range is [0, 1] in both directions. Values outside it are not
//! clamped.
//!
//! # Used By
//!
//! - `chroma-primaries` - working space descriptors
//! - `chroma-convert` - RGB <-> linear RGB conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod lstar;
pub mod rec2020;
pub mod rec709;
pub mod srgb;

mod companding;

pub use companding::Companding;

//! # chroma-core
//!
//! Color value types for colorimetric conversion.
//!
//! This crate provides the plain data types every other chroma crate
//! passes around:
//!
//! - [`CieXyz`], [`CieXyy`] - the XYZ hub and its chromaticity form
//! - [`CieLab`], [`CieLch`] - CIE 1976 L\*a\*b\* and its cylindrical form
//! - [`CieLuv`], [`CieLchuv`] - CIE 1976 L\*u\*v\* and its cylindrical form
//! - [`HunterLab`] - Hunter 1948 Lab
//! - [`Lms`] - cone response
//! - [`Rgb`], [`LinearRgb`] - companded and linear RGB in a working space
//! - [`Hsl`], [`Hsv`], [`Cmyk`], [`YCbCr`] - device-relative forms of RGB
//! - [`Color`], [`ColorSpaceKind`] - run-time tagged values
//!
//! ## Design
//!
//! Values are small `Copy` structs with public fields. Types that depend
//! on a reference white carry it as a field (`white_point: CieXyz`, or
//! `working_space` for RGB) and compare it as part of equality, so a D50
//! Lab value never equals the same numbers under D65:
//!
//! ```rust
//! use chroma_core::{CieLab, illuminant};
//!
//! let d50 = CieLab::new(50.0, 10.0, 10.0);
//! let d65 = CieLab::with_white_point(50.0, 10.0, 10.0, illuminant::D65);
//! assert_ne!(d50, d65);
//! ```
//!
//! No conversion logic lives here beyond the Lab/LCh and Luv/LCh(uv)
//! polar helpers; see `chroma-convert`.
//!
//! ## Features
//!
//! - `approx` - `AbsDiffEq`, `RelativeEq` and `UlpsEq` for every value type.
//!   Channels compare within tolerance; white points and working spaces
//!   compare exactly.
//!
//! ## Crate Structure
//!
//! ```text
//! chroma-math
//!    ^
//!    +-- chroma-transfer
//!    +-- chroma-primaries
//!    +-- chroma-core (this crate)
//!           ^
//!           +-- chroma-convert
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie;
pub mod illuminant;

#[cfg(any(test, feature = "approx"))]
mod approx_eq;
mod device;
mod hunter;
mod kind;
mod lab;
mod lms;
mod luv;
mod polar;
mod rgb;
mod xyz;

pub use device::{Cmyk, Hsl, Hsv, YCbCr};
pub use hunter::HunterLab;
pub use kind::{Color, ColorSpaceKind};
pub use lab::{CieLab, CieLch};
pub use lms::Lms;
pub use luv::{CieLchuv, CieLuv};
pub use rgb::{LinearRgb, Rgb};
pub use xyz::{CieXyy, CieXyz};

pub use chroma_primaries::RgbWorkingSpace;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use chroma_core::prelude::*;
///
/// let c: Color = CieLab::new(50.0, 0.0, 0.0).into();
/// assert_eq!(c.kind(), ColorSpaceKind::CieLab);
/// ```
pub mod prelude {
    pub use crate::illuminant;
    pub use crate::{
        CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Color, ColorSpaceKind, Hsl, Hsv,
        HunterLab, LinearRgb, Lms, Rgb, RgbWorkingSpace, YCbCr,
    };
}

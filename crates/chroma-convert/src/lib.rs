//! # chroma-convert
//!
//! Conversion between fourteen color spaces with chromatic adaptation.
//!
//! Every conversion is routed through CIE XYZ (the hub) unless both ends
//! belong to the same family. When the source and destination reference
//! whites differ, the color is adapted exactly once, with a von Kries
//! transform in a cone response (LMS) basis by default.
//!
//! - **Spaces** - XYZ, xyY, Lab, LCh(ab), Luv, LCh(uv), Hunter Lab, LMS,
//!   linear RGB, RGB, HSL, HSV, CMYK, YCbCr
//! - **Adaptation** - Bradford, Bradford sharp, von Kries HPE, CAT02,
//!   CMCCAT2000, XYZ scaling, or any [`ChromaticAdaptation`]
//! - **Bulk** - slice conversions, parallel with the `parallel` feature
//!
//! # Architecture
//!
//! ```text
//!                 chroma-convert
//!                       |
//!                  chroma-core
//!                       |
//!               chroma-primaries
//!                       |
//!     +-----------------+
//!     |                 |
//! chroma-transfer       |
//!     |                 |
//!     +--------+--------+
//!              |
//!         chroma-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_convert::{ColorSpaceConverter, ConverterOptions};
//! use chroma_convert::primaries::ADOBE_RGB_1998;
//! use chroma_core::{CieLab, Rgb};
//!
//! // Defaults: D65 XYZ, D50 Lab, sRGB output, Bradford adaptation
//! let conv = ColorSpaceConverter::default();
//!
//! let lab: CieLab = conv.to_cie_lab(Rgb::new(0.8, 0.4, 0.2));
//! assert!(lab.l > 50.0);
//!
//! // Re-express sRGB values in Adobe RGB
//! let adobe = ColorSpaceConverter::new(
//!     ConverterOptions::default().with_target_rgb_working_space(ADOBE_RGB_1998),
//! )
//! .unwrap();
//! let rgb = adobe.to_rgb(Rgb::new(0.0, 1.0, 0.0));
//! assert!(rgb.g < 1.0);
//! ```
//!
//! # Reference Whites
//!
//! | Destination | White |
//! |-------------|-------|
//! | XYZ, xyY, LMS | `white_point` (D65) |
//! | Lab, LCh(ab) | `target_lab_white_point` (D50) |
//! | Luv, LCh(uv) | `target_luv_white_point` (D65) |
//! | Hunter Lab | `target_hunter_lab_white_point` (C) |
//! | RGB family | white of `target_rgb_working_space` (sRGB, D65) |
//!
//! Values never clamp. Out-of-range inputs give whatever the formulas give,
//! NaN included.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adaptation;
mod bulk;
mod converter;
mod dynamic;
mod error;
mod hub;
pub mod converters;

pub use adaptation::{ChromaticAdaptation, VonKriesAdaptation};
pub use converter::{ColorSpaceConverter, ConverterOptions};
pub use error::{ColorError, ColorResult};
pub use hub::FromColor;

// Re-export sub-crates for convenience
pub use chroma_core as types;
pub use chroma_math as math;
pub use chroma_primaries as primaries;
pub use chroma_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ChromaticAdaptation, ColorError, ColorResult, ColorSpaceConverter, ConverterOptions,
        FromColor, VonKriesAdaptation,
    };

    pub use chroma_core::prelude::*;

    pub use chroma_math::{BRADFORD, CAT02, CMCCAT2000, VON_KRIES_HPE, XYZ_SCALING};
}

//! # chroma-math
//!
//! Math primitives for colorimetric conversion.
//!
//! - [`Vec3`] - 3-component vectors for XYZ, LMS and RGB triplets
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ and XYZ/LMS transforms
//! - Standard illuminants ([`D65`], [`D50`], [`C`], ...) as XYZ white points
//! - Cone response matrices ([`BRADFORD`], [`CAT02`], ...) and the von Kries
//!   scaling used for chromatic adaptation
//!
//! # Design
//!
//! Matrix inversion goes through [`glam`]; everything else is plain
//! row-major arithmetic on small `Copy` types.
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{von_kries_scale, Vec3, BRADFORD, D65, D50};
//!
//! // Adapt a D65-relative color to D50 in the Bradford cone basis.
//! let to_xyz = BRADFORD.inverse().unwrap();
//! let adapt = |xyz: Vec3| to_xyz * von_kries_scale(BRADFORD * xyz, BRADFORD * D65, BRADFORD * D50);
//! assert!(adapt(Vec3::new(0.2, 0.3, 0.4)).is_finite());
//!
//! // White maps onto white.
//! let white = adapt(D65);
//! assert!((white.x - D50.x).abs() < 1e-4);
//! ```
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix generation
//! - `chroma-core` - white point constants of the value types
//! - `chroma-convert` - pairwise converters and chromatic adaptation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod illuminant;
mod lms;
mod mat3;
mod vec3;

pub use illuminant::*;
pub use lms::*;
pub use mat3::*;
pub use vec3::*;

//! Closed-form pairwise converters.
//!
//! Each function maps one representation to another relative to a single
//! white point or working space. None of them adapts; white point
//! changes are the job of [`ColorSpaceConverter`](crate::ColorSpaceConverter).

mod device;
mod hunter;
mod lab;
mod lms;
mod luv;
mod rgb;
mod xyy;

pub use device::{
    cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_ycbcr,
    ycbcr_to_rgb,
};
pub use hunter::{hunter_lab_to_xyz, xyz_to_hunter_lab};
pub use lab::{lab_to_xyz, xyz_to_lab};
pub use lms::CieXyzAndLmsConverter;
pub use luv::{luv_to_xyz, xyz_to_luv};
pub use rgb::{linear_to_rgb, rgb_to_linear, LinearRgbToXyz, XyzToLinearRgb};
pub use xyy::{xyy_to_xyz, xyz_to_xyy};

//! Approximate equality through the `approx` traits.
//!
//! Channels compare within the given epsilon. A reference white or working
//! space is part of the value's meaning and always compares exactly.
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use chroma_core::{CieLab, illuminant};
//!
//! let a = CieLab::new(50.0, 10.0, -4.0);
//! assert_abs_diff_eq!(a, CieLab::new(50.000_01, 10.0, -4.0), epsilon = 1e-4);
//!
//! let d65 = CieLab::with_white_point(50.0, 10.0, -4.0, illuminant::D65);
//! approx::assert_abs_diff_ne!(a, d65, epsilon = 1e-4);
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, LinearRgb, Lms,
    Rgb, YCbCr,
};

macro_rules! impl_approx {
    ($ty:ident { $($ch:ident),+ } $(exact $reference:ident)?) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(self.$reference == other.$reference &&)?
                $(self.$ch.abs_diff_eq(&other.$ch, epsilon))&&+
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                <f32 as RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(self.$reference == other.$reference &&)?
                $(self.$ch.relative_eq(&other.$ch, epsilon, max_relative))&&+
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                <f32 as UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                $(self.$reference == other.$reference &&)?
                $(self.$ch.ulps_eq(&other.$ch, epsilon, max_ulps))&&+
            }
        }
    };
}

impl_approx!(CieXyz { x, y, z });
impl_approx!(CieXyy { x, y, yl });
impl_approx!(CieLab { l, a, b } exact white_point);
impl_approx!(CieLch { l, c, h } exact white_point);
impl_approx!(CieLuv { l, u, v } exact white_point);
impl_approx!(CieLchuv { l, c, h } exact white_point);
impl_approx!(HunterLab { l, a, b } exact white_point);
impl_approx!(Lms { l, m, s });
impl_approx!(Rgb { r, g, b } exact working_space);
impl_approx!(LinearRgb { r, g, b } exact working_space);
impl_approx!(Hsl { h, s, l });
impl_approx!(Hsv { h, s, v });
impl_approx!(Cmyk { c, m, y, k });
impl_approx!(YCbCr { y, cb, cr });

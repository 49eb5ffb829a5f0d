//! Pairwise conversion paths.
//!
//! Every ordered pair of distinct spaces takes one of three routes:
//!
//! - **Hub**: source -> XYZ relative to the source's own white, one
//!   adaptation to the white the destination requires, then the
//!   destination's closed form.
//! - **RGB family**: RGB, linear RGB, HSL, HSV, CMYK and YCbCr convert among
//!   themselves through companded RGB in the target working space, without
//!   touching XYZ unless a working space has to change.
//! - **Polar**: Lab <-> LCh(ab) and Luv <-> LCh(uv) use the polar helpers and
//!   adapt only when the white differs from the family target.
//!
//! Converting a value to its own type returns it unchanged.

use chroma_core::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, LinearRgb, Lms,
    Rgb, YCbCr,
};

use crate::converter::ColorSpaceConverter;
use crate::converters::{
    cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, hunter_lab_to_xyz, lab_to_xyz, linear_to_rgb, luv_to_xyz,
    rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_linear, rgb_to_ycbcr, xyy_to_xyz,
    xyz_to_hunter_lab, xyz_to_lab, xyz_to_luv, xyz_to_xyy, ycbcr_to_rgb,
};

/// Conversion from `S` under a converter's configuration.
///
/// Implemented for every ordered pair of the fourteen value types,
/// including each type to itself.
///
/// # Example
///
/// ```rust
/// use chroma_convert::{ColorSpaceConverter, FromColor};
/// use chroma_core::{CieXyz, Rgb};
///
/// let conv = ColorSpaceConverter::default();
/// let xyz = CieXyz::from_color(&conv, Rgb::new(1.0, 1.0, 1.0));
/// assert!((xyz.y - 1.0).abs() < 1e-4);
/// ```
pub trait FromColor<S>: Sized {
    /// Converts `source`.
    fn from_color(converter: &ColorSpaceConverter, source: S) -> Self;
}

// ============================================================================
// Hub path
// ============================================================================

/// A type that can enter and leave the XYZ hub.
trait HubSpace: Sized {
    /// XYZ together with the white it is relative to.
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz);

    /// White an XYZ value must be relative to before [`from_hub`](Self::from_hub).
    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz;

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self;
}

#[inline]
fn via_hub<S: HubSpace, T: HubSpace>(conv: &ColorSpaceConverter, source: S) -> T {
    let (xyz, white) = source.into_hub(conv);
    let xyz = conv.adapt(xyz, white, T::hub_white(conv));
    T::from_hub(conv, xyz)
}

impl HubSpace for CieXyz {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        (self, conv.options().white_point)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        conv.options().white_point
    }

    fn from_hub(_: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        xyz
    }
}

impl HubSpace for CieXyy {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        (xyy_to_xyz(self), conv.options().white_point)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        conv.options().white_point
    }

    fn from_hub(_: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        xyz_to_xyy(xyz)
    }
}

impl HubSpace for Lms {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        (conv.lms_converter().to_xyz(self), conv.options().white_point)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        conv.options().white_point
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        conv.lms_converter().to_lms(xyz)
    }
}

impl HubSpace for CieLab {
    fn into_hub(self, _: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        (lab_to_xyz(self), self.white_point)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        conv.options().target_lab_white_point
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        xyz_to_lab(xyz, Self::hub_white(conv))
    }
}

impl HubSpace for CieLch {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        CieLab::from_lch(self).into_hub(conv)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        CieLab::hub_white(conv)
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        CieLch::from_lab(CieLab::from_hub(conv, xyz))
    }
}

impl HubSpace for CieLuv {
    fn into_hub(self, _: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        (luv_to_xyz(self), self.white_point)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        conv.options().target_luv_white_point
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        xyz_to_luv(xyz, Self::hub_white(conv))
    }
}

impl HubSpace for CieLchuv {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        CieLuv::from_lchuv(self).into_hub(conv)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        CieLuv::hub_white(conv)
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        CieLchuv::from_luv(CieLuv::from_hub(conv, xyz))
    }
}

impl HubSpace for HunterLab {
    fn into_hub(self, _: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        (hunter_lab_to_xyz(self), self.white_point)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        conv.options().target_hunter_lab_white_point
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        xyz_to_hunter_lab(xyz, Self::hub_white(conv))
    }
}

impl HubSpace for LinearRgb {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        let ws = self.working_space;
        (
            conv.linear_rgb_to_xyz(ws).convert(self),
            CieXyz::from_vec3(ws.white),
        )
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        CieXyz::from_vec3(conv.target_working_space().white)
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        conv.xyz_to_target_rgb().convert(xyz)
    }
}

impl HubSpace for Rgb {
    fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
        rgb_to_linear(self).into_hub(conv)
    }

    fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
        LinearRgb::hub_white(conv)
    }

    fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
        linear_to_rgb(LinearRgb::from_hub(conv, xyz))
    }
}

/// Device spaces enter the hub as RGB in the target working space.
macro_rules! device_hub_space {
    ($($ty:ty => $to_rgb:ident, $from_rgb:ident;)+) => {
        $(
            impl HubSpace for $ty {
                fn into_hub(self, conv: &ColorSpaceConverter) -> (CieXyz, CieXyz) {
                    $to_rgb(self, *conv.target_working_space()).into_hub(conv)
                }

                fn hub_white(conv: &ColorSpaceConverter) -> CieXyz {
                    Rgb::hub_white(conv)
                }

                fn from_hub(conv: &ColorSpaceConverter, xyz: CieXyz) -> Self {
                    $from_rgb(Rgb::from_hub(conv, xyz))
                }
            }
        )+
    };
}

device_hub_space! {
    Hsl => hsl_to_rgb, rgb_to_hsl;
    Hsv => hsv_to_rgb, rgb_to_hsv;
    Cmyk => cmyk_to_rgb, rgb_to_cmyk;
    YCbCr => ycbcr_to_rgb, rgb_to_ycbcr;
}

macro_rules! impl_via_hub {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl FromColor<$src> for $dst {
                #[inline]
                fn from_color(converter: &ColorSpaceConverter, source: $src) -> Self {
                    via_hub(converter, source)
                }
            }
        )+
    };
}

impl_via_hub!(CieXyz => CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_hub!(CieXyy => CieXyz, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_hub!(Lms => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_hub!(HunterLab => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);

impl_via_hub!(CieLab => CieXyz, CieXyy, CieLuv, CieLchuv, HunterLab, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_hub!(CieLch => CieXyz, CieXyy, CieLuv, CieLchuv, HunterLab, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_hub!(CieLuv => CieXyz, CieXyy, CieLab, CieLch, HunterLab, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_hub!(CieLchuv => CieXyz, CieXyy, CieLab, CieLch, HunterLab, Lms,
    LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr);

impl_via_hub!(LinearRgb => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms);
impl_via_hub!(Rgb => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms);
impl_via_hub!(Hsl => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms);
impl_via_hub!(Hsv => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms);
impl_via_hub!(Cmyk => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms);
impl_via_hub!(YCbCr => CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms);

// ============================================================================
// RGB family
// ============================================================================

/// Anchored on companded RGB in the target working space.
trait RgbFamily: Sized {
    fn to_anchor(self, conv: &ColorSpaceConverter) -> Rgb;
    fn from_anchor(conv: &ColorSpaceConverter, rgb: Rgb) -> Self;
}

impl RgbFamily for Rgb {
    fn to_anchor(self, conv: &ColorSpaceConverter) -> Rgb {
        conv.adapt_rgb(self)
    }

    fn from_anchor(_: &ColorSpaceConverter, rgb: Rgb) -> Self {
        rgb
    }
}

impl RgbFamily for LinearRgb {
    fn to_anchor(self, conv: &ColorSpaceConverter) -> Rgb {
        linear_to_rgb(conv.adapt_linear_rgb(self))
    }

    fn from_anchor(_: &ColorSpaceConverter, rgb: Rgb) -> Self {
        rgb_to_linear(rgb)
    }
}

macro_rules! device_rgb_family {
    ($($ty:ty => $to_rgb:ident, $from_rgb:ident;)+) => {
        $(
            impl RgbFamily for $ty {
                fn to_anchor(self, conv: &ColorSpaceConverter) -> Rgb {
                    $to_rgb(self, *conv.target_working_space())
                }

                fn from_anchor(_: &ColorSpaceConverter, rgb: Rgb) -> Self {
                    $from_rgb(rgb)
                }
            }
        )+
    };
}

device_rgb_family! {
    Hsl => hsl_to_rgb, rgb_to_hsl;
    Hsv => hsv_to_rgb, rgb_to_hsv;
    Cmyk => cmyk_to_rgb, rgb_to_cmyk;
    YCbCr => ycbcr_to_rgb, rgb_to_ycbcr;
}

macro_rules! impl_via_rgb {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl FromColor<$src> for $dst {
                #[inline]
                fn from_color(converter: &ColorSpaceConverter, source: $src) -> Self {
                    <$dst as RgbFamily>::from_anchor(converter, source.to_anchor(converter))
                }
            }
        )+
    };
}

impl_via_rgb!(LinearRgb => Rgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_rgb!(Rgb => LinearRgb, Hsl, Hsv, Cmyk, YCbCr);
impl_via_rgb!(Hsl => LinearRgb, Rgb, Hsv, Cmyk, YCbCr);
impl_via_rgb!(Hsv => LinearRgb, Rgb, Hsl, Cmyk, YCbCr);
impl_via_rgb!(Cmyk => LinearRgb, Rgb, Hsl, Hsv, YCbCr);
impl_via_rgb!(YCbCr => LinearRgb, Rgb, Hsl, Hsv, Cmyk);

// ============================================================================
// Polar pairs
// ============================================================================

impl FromColor<CieLab> for CieLch {
    #[inline]
    fn from_color(converter: &ColorSpaceConverter, source: CieLab) -> Self {
        CieLch::from_lab(converter.adapt_cie_lab(source))
    }
}

impl FromColor<CieLch> for CieLab {
    #[inline]
    fn from_color(converter: &ColorSpaceConverter, source: CieLch) -> Self {
        converter.adapt_cie_lab(CieLab::from_lch(source))
    }
}

impl FromColor<CieLuv> for CieLchuv {
    #[inline]
    fn from_color(converter: &ColorSpaceConverter, source: CieLuv) -> Self {
        CieLchuv::from_luv(converter.adapt_cie_luv(source))
    }
}

impl FromColor<CieLchuv> for CieLuv {
    #[inline]
    fn from_color(converter: &ColorSpaceConverter, source: CieLchuv) -> Self {
        converter.adapt_cie_luv(CieLuv::from_lchuv(source))
    }
}

// ============================================================================
// Identity
// ============================================================================

macro_rules! impl_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromColor<$ty> for $ty {
                #[inline]
                fn from_color(_: &ColorSpaceConverter, source: $ty) -> Self {
                    source
                }
            }
        )+
    };
}

impl_identity!(
    CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms, LinearRgb, Rgb, Hsl, Hsv,
    Cmyk, YCbCr,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::illuminant;
    use chroma_primaries::{ECI_RGB_V2, SRGB};

    #[test]
    fn test_identity_keeps_reference() {
        let conv = ColorSpaceConverter::default();
        let lab = CieLab::with_white_point(50.0, 10.0, 10.0, illuminant::A);
        assert_eq!(conv.to_cie_lab(lab), lab);

        let rgb = Rgb::with_working_space(0.1, 0.2, 0.3, ECI_RGB_V2);
        assert_eq!(conv.to_rgb(rgb), rgb);
    }

    #[test]
    fn test_lch_to_lab_keeps_target_white() {
        let conv = ColorSpaceConverter::default();
        let lch = CieLch::new(60.0, 30.0, 45.0);
        let lab = conv.to_cie_lab(lch);
        assert_eq!(lab.white_point, illuminant::D50);
        assert!((lab.a - lab.b).abs() < 1e-4);
    }

    #[test]
    fn test_polar_adapts_foreign_white() {
        let conv = ColorSpaceConverter::default();
        let luv = CieLuv::with_white_point(70.0, 5.0, 5.0, illuminant::A);
        let lch = conv.to_cie_lchuv(luv);
        assert_eq!(lch.white_point, illuminant::D65);
    }

    #[test]
    fn test_device_spaces_use_target_working_space() {
        let conv = ColorSpaceConverter::default();
        let rgb = conv.to_rgb(Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(rgb, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(rgb.working_space, SRGB);
    }

    #[test]
    fn test_hub_adapts_once() {
        let conv = ColorSpaceConverter::default();
        // Lab white under D50 is the D65 XYZ white once adapted.
        let xyz = conv.to_cie_xyz(CieLab::new(100.0, 0.0, 0.0));
        assert!((xyz.x - illuminant::D65.x).abs() < 1e-3);
        assert!((xyz.y - 1.0).abs() < 1e-3);
        assert!((xyz.z - illuminant::D65.z).abs() < 1e-3);
    }
}

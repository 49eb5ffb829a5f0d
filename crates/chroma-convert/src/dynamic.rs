//! Conversions where the spaces are only known at run time.

use chroma_core::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Color, ColorSpaceKind, Hsl, Hsv,
    HunterLab, LinearRgb, Lms, Rgb, YCbCr,
};

use crate::converter::ColorSpaceConverter;
use crate::hub::FromColor;

macro_rules! dynamic_dispatch {
    ($($variant:ident),+ $(,)?) => {
        fn convert_to<S>(converter: &ColorSpaceConverter, source: S, target: ColorSpaceKind) -> Color
        where
            $($variant: FromColor<S>,)+
        {
            match target {
                $(ColorSpaceKind::$variant => Color::$variant($variant::from_color(converter, source)),)+
            }
        }

        impl ColorSpaceConverter {
            /// Converts a tagged value to the space named by `target`.
            ///
            /// Follows the same paths as the typed conversions.
            ///
            /// ```rust
            /// use chroma_convert::ColorSpaceConverter;
            /// use chroma_core::{Color, ColorSpaceKind, Rgb};
            ///
            /// let conv = ColorSpaceConverter::default();
            /// let out = conv.convert_color(Rgb::new(1.0, 0.0, 0.0).into(), ColorSpaceKind::Hsl);
            /// assert_eq!(out.kind(), ColorSpaceKind::Hsl);
            /// ```
            pub fn convert_color(&self, color: Color, target: ColorSpaceKind) -> Color {
                match color {
                    $(Color::$variant(value) => convert_to(self, value, target),)+
                }
            }
        }
    };
}

dynamic_dispatch!(
    CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms, LinearRgb, Rgb, Hsl, Hsv,
    Cmyk, YCbCr,
);

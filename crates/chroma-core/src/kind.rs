//! Run-time color space tags and the [`Color`] sum type.
//!
//! The typed API converts between concrete value types chosen at compile
//! time. When the source or destination space is only known at run time
//! (configuration files, UI pickers, mixed buffers) a value is wrapped in
//! [`Color`] and the destination is named by a [`ColorSpaceKind`].

use std::fmt;

use crate::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, LinearRgb, Lms,
    Rgb, YCbCr,
};

/// Identifies one of the fourteen supported color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpaceKind {
    /// CIE XYZ
    CieXyz,
    /// CIE xyY
    CieXyy,
    /// CIE L\*a\*b\*
    CieLab,
    /// CIE LCh(ab)
    CieLch,
    /// CIE L\*u\*v\*
    CieLuv,
    /// CIE LCh(uv)
    CieLchuv,
    /// Hunter Lab
    HunterLab,
    /// LMS cone response
    Lms,
    /// Linear RGB
    LinearRgb,
    /// Companded RGB
    Rgb,
    /// HSL
    Hsl,
    /// HSV
    Hsv,
    /// CMYK
    Cmyk,
    /// YCbCr (JFIF)
    YCbCr,
}

impl ColorSpaceKind {
    /// All kinds, in declaration order.
    pub const ALL: [ColorSpaceKind; 14] = [
        Self::CieXyz,
        Self::CieXyy,
        Self::CieLab,
        Self::CieLch,
        Self::CieLuv,
        Self::CieLchuv,
        Self::HunterLab,
        Self::Lms,
        Self::LinearRgb,
        Self::Rgb,
        Self::Hsl,
        Self::Hsv,
        Self::Cmyk,
        Self::YCbCr,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CieXyz => "CIE XYZ",
            Self::CieXyy => "CIE xyY",
            Self::CieLab => "CIE L*a*b*",
            Self::CieLch => "CIE LCh(ab)",
            Self::CieLuv => "CIE L*u*v*",
            Self::CieLchuv => "CIE LCh(uv)",
            Self::HunterLab => "Hunter Lab",
            Self::Lms => "LMS",
            Self::LinearRgb => "Linear RGB",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
            Self::Cmyk => "CMYK",
            Self::YCbCr => "YCbCr",
        }
    }
}

impl fmt::Display for ColorSpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! color_enum {
    ($($variant:ident),* $(,)?) => {
        /// A color value of any supported space.
        ///
        /// # Example
        ///
        /// ```rust
        /// use chroma_core::{Color, ColorSpaceKind, Hsv};
        ///
        /// let c: Color = Hsv::new(120.0, 1.0, 1.0).into();
        /// assert_eq!(c.kind(), ColorSpaceKind::Hsv);
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Color {
            $(
                #[allow(missing_docs)]
                $variant($variant),
            )*
        }

        impl Color {
            /// The space this value lives in.
            pub const fn kind(&self) -> ColorSpaceKind {
                match self {
                    $(Self::$variant(_) => ColorSpaceKind::$variant,)*
                }
            }
        }

        $(
            impl From<$variant> for Color {
                #[inline]
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

color_enum!(
    CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv, HunterLab, Lms, LinearRgb, Rgb, Hsl, Hsv,
    Cmyk, YCbCr,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Color::from(CieLab::default()).kind(), ColorSpaceKind::CieLab);
        assert_eq!(Color::from(Rgb::default()).kind(), ColorSpaceKind::Rgb);
        assert_eq!(Color::from(Cmyk::default()).kind(), ColorSpaceKind::Cmyk);
    }

    #[test]
    fn test_all_kinds_distinct() {
        for (i, a) in ColorSpaceKind::ALL.iter().enumerate() {
            for b in &ColorSpaceKind::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorSpaceKind::HunterLab.to_string(), "Hunter Lab");
    }
}

//! CIE L\*u\*v\* and CIE LCh(uv). Family default white is D65.

use crate::polar::{from_polar, to_polar};
use crate::{illuminant, CieXyz};

/// A CIE L\*u\*v\* (1976) value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLuv {
    /// Lightness
    pub l: f32,
    /// u\* chromaticity coordinate
    pub u: f32,
    /// v\* chromaticity coordinate
    pub v: f32,
    /// Reference white
    pub white_point: CieXyz,
}

impl CieLuv {
    /// Reference white used by [`CieLuv::new`]: D65.
    pub const DEFAULT_WHITE_POINT: CieXyz = illuminant::D65;

    /// Creates a Luv value relative to D65.
    #[inline]
    pub const fn new(l: f32, u: f32, v: f32) -> Self {
        Self::with_white_point(l, u, v, Self::DEFAULT_WHITE_POINT)
    }

    /// Creates a Luv value relative to an explicit white.
    #[inline]
    pub const fn with_white_point(l: f32, u: f32, v: f32, white_point: CieXyz) -> Self {
        Self {
            l,
            u,
            v,
            white_point,
        }
    }

    /// Cartesian form of an LCh(uv) value, keeping its white point.
    #[inline]
    pub fn from_lchuv(lch: CieLchuv) -> Self {
        let (u, v) = from_polar(lch.c, lch.h);
        Self::with_white_point(lch.l, u, v, lch.white_point)
    }

    /// Returns `[L, u, v]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.u, self.v]
    }
}

impl Default for CieLuv {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A CIE LCh(uv) value: Luv in cylindrical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLchuv {
    /// Lightness
    pub l: f32,
    /// Chroma
    pub c: f32,
    /// Hue angle in degrees, [0, 360)
    pub h: f32,
    /// Reference white
    pub white_point: CieXyz,
}

impl CieLchuv {
    /// Reference white used by [`CieLchuv::new`]: D65.
    pub const DEFAULT_WHITE_POINT: CieXyz = illuminant::D65;

    /// Creates an LCh(uv) value relative to D65.
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self::with_white_point(l, c, h, Self::DEFAULT_WHITE_POINT)
    }

    /// Creates an LCh(uv) value relative to an explicit white.
    #[inline]
    pub const fn with_white_point(l: f32, c: f32, h: f32, white_point: CieXyz) -> Self {
        Self {
            l,
            c,
            h,
            white_point,
        }
    }

    /// Cylindrical form of a Luv value, keeping its white point.
    #[inline]
    pub fn from_luv(luv: CieLuv) -> Self {
        let (c, h) = to_polar(luv.u, luv.v);
        Self::with_white_point(luv.l, c, h, luv.white_point)
    }

    /// Returns `[L, C, h]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.c, self.h]
    }
}

impl Default for CieLchuv {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

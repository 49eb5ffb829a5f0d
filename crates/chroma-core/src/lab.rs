//! CIE L\*a\*b\* and its cylindrical form CIE LCh(ab).
//!
//! Both carry their reference white. The family default is D50, the
//! ICC profile connection space white.

use crate::polar::{from_polar, to_polar};
use crate::{illuminant, CieXyz};

/// A CIE L\*a\*b\* (1976) value.
///
/// `l` is lightness in [0, 100]; `a` and `b` are the opponent axes.
///
/// # Example
///
/// ```rust
/// use chroma_core::{CieLab, illuminant};
///
/// let lab = CieLab::new(53.2, 80.1, 67.2);
/// assert_eq!(lab.white_point, CieLab::DEFAULT_WHITE_POINT);
///
/// let d65 = CieLab::with_white_point(53.2, 80.1, 67.2, illuminant::D65);
/// assert_ne!(lab, d65);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    /// Lightness
    pub l: f32,
    /// Green (-) to red (+)
    pub a: f32,
    /// Blue (-) to yellow (+)
    pub b: f32,
    /// Reference white
    pub white_point: CieXyz,
}

impl CieLab {
    /// Reference white used by [`CieLab::new`]: D50.
    pub const DEFAULT_WHITE_POINT: CieXyz = illuminant::D50;

    /// Creates a Lab value relative to D50.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self::with_white_point(l, a, b, Self::DEFAULT_WHITE_POINT)
    }

    /// Creates a Lab value relative to an explicit white.
    #[inline]
    pub const fn with_white_point(l: f32, a: f32, b: f32, white_point: CieXyz) -> Self {
        Self {
            l,
            a,
            b,
            white_point,
        }
    }

    /// Cartesian form of an LCh value, keeping its white point.
    #[inline]
    pub fn from_lch(lch: CieLch) -> Self {
        let (a, b) = from_polar(lch.c, lch.h);
        Self::with_white_point(lch.l, a, b, lch.white_point)
    }

    /// Returns `[L, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }
}

impl Default for CieLab {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A CIE LCh(ab) value: Lab in cylindrical coordinates.
///
/// `c` is chroma (>= 0), `h` is hue in degrees within [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLch {
    /// Lightness
    pub l: f32,
    /// Chroma
    pub c: f32,
    /// Hue angle in degrees
    pub h: f32,
    /// Reference white
    pub white_point: CieXyz,
}

impl CieLch {
    /// Reference white used by [`CieLch::new`]: D50.
    pub const DEFAULT_WHITE_POINT: CieXyz = illuminant::D50;

    /// Creates an LCh value relative to D50.
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self::with_white_point(l, c, h, Self::DEFAULT_WHITE_POINT)
    }

    /// Creates an LCh value relative to an explicit white.
    #[inline]
    pub const fn with_white_point(l: f32, c: f32, h: f32, white_point: CieXyz) -> Self {
        Self {
            l,
            c,
            h,
            white_point,
        }
    }

    /// Cylindrical form of a Lab value, keeping its white point.
    ///
    /// ```rust
    /// use chroma_core::{CieLab, CieLch};
    ///
    /// let lch = CieLch::from_lab(CieLab::new(50.0, 0.0, -20.0));
    /// assert!((lch.c - 20.0).abs() < 1e-4);
    /// assert!((lch.h - 270.0).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn from_lab(lab: CieLab) -> Self {
        let (c, h) = to_polar(lab.a, lab.b);
        Self::with_white_point(lab.l, c, h, lab.white_point)
    }

    /// Returns `[L, C, h]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.c, self.h]
    }
}

impl Default for CieLch {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_keeps_white() {
        let lab = CieLab::with_white_point(40.0, 12.0, -7.0, illuminant::A);
        let lch = CieLch::from_lab(lab);
        assert_eq!(lch.white_point, illuminant::A);
        assert_eq!(CieLab::from_lch(lch).white_point, illuminant::A);
    }

    #[test]
    fn test_polar_roundtrip() {
        let lab = CieLab::new(62.5, -33.0, 18.0);
        let back = CieLab::from_lch(CieLch::from_lab(lab));
        assert_eq!(back.l, lab.l);
        assert!((back.a - lab.a).abs() < 1e-4);
        assert!((back.b - lab.b).abs() < 1e-4);
    }

    #[test]
    fn test_hue_in_range() {
        for (a, b) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
            let lch = CieLch::from_lab(CieLab::new(50.0, a, b));
            assert!(lch.h >= 0.0 && lch.h < 360.0, "h = {}", lch.h);
        }
    }
}

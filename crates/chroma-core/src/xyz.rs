//! CIE XYZ and CIE xyY.
//!
//! [`CieXyz`] is the hub every conversion passes through and also the
//! type used for reference white points. Its channels are relative: the
//! white of the context (a Lab white point, a working space white, or the
//! converter's global white) has `Y = 1`.
//!
//! [`CieXyy`] splits XYZ into a chromaticity `(x, y)` and the luminance
//! `Y` carried unchanged.

use chroma_math::Vec3;

/// A CIE 1931 XYZ tristimulus value.
///
/// # Example
///
/// ```rust
/// use chroma_core::{CieXyz, illuminant};
///
/// let white = illuminant::D65;
/// assert_eq!(white.y, 1.0);
/// assert_eq!(CieXyz::from(white.to_vec3()), white);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieXyz {
    /// X component
    pub x: f32,
    /// Y component (luminance)
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl CieXyz {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates from a [`Vec3`].
    #[inline]
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Returns the components as a [`Vec3`].
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the components as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every component is finite and strictly positive.
    ///
    /// This is what a usable reference white must satisfy.
    #[inline]
    pub fn is_valid_white(self) -> bool {
        self.to_vec3().is_finite() && self.to_vec3().is_positive()
    }
}

impl From<Vec3> for CieXyz {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::from_vec3(v)
    }
}

impl From<CieXyz> for Vec3 {
    #[inline]
    fn from(c: CieXyz) -> Self {
        c.to_vec3()
    }
}

/// A CIE xyY value: chromaticity plus luminance.
///
/// Always relative to the converter's global white point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieXyy {
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
    /// Y luminance
    pub yl: f32,
}

impl CieXyy {
    /// Creates a new xyY value.
    #[inline]
    pub const fn new(x: f32, y: f32, yl: f32) -> Self {
        Self { x, y, yl }
    }

    /// Returns the components as an array `[x, y, Y]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.yl]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant;

    #[test]
    fn test_valid_white() {
        assert!(illuminant::D50.is_valid_white());
        assert!(!CieXyz::new(0.95, 0.0, 1.08).is_valid_white());
        assert!(!CieXyz::new(0.95, 1.0, f32::INFINITY).is_valid_white());
        assert!(!CieXyz::new(f32::NAN, 1.0, 1.0).is_valid_white());
    }

    #[test]
    fn test_vec3_interop() {
        let c = CieXyz::new(0.2, 0.3, 0.4);
        let v: Vec3 = c.into();
        assert_eq!(v, Vec3::new(0.2, 0.3, 0.4));
        assert_eq!(CieXyz::from(v), c);
    }
}

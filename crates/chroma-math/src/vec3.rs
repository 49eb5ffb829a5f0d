//! 3D vector type for color triplets.
//!
//! [`Vec3`] carries XYZ, LMS and RGB triplets between the converters.
//! Arithmetic is component-wise, which is exactly what von Kries scaling
//! in the cone domain needs.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::Vec3;
//!
//! let source_lms = Vec3::new(0.94, 1.04, 1.09);
//! let target_lms = Vec3::new(0.99, 1.02, 0.82);
//! let scale = target_lms / source_lms;
//! let adapted = Vec3::new(0.2, 0.3, 0.4) * scale;
//! assert!(adapted.is_finite());
//! ```

use std::ops::{Div, Mul};

/// A 3D vector for color triplets (XYZ, LMS, RGB).
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`.
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z. For LMS: x=L, y=M, z=S.
///
/// # Example
///
/// ```rust
/// use chroma_math::Vec3;
///
/// let xyz = Vec3::new(0.95047, 1.0, 1.08883);
/// assert_eq!(xyz.y, 1.0);
/// assert_eq!(xyz.to_array(), [0.95047, 1.0, 1.08883]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ, L for LMS)
    pub x: f32,
    /// Y component (G for RGB, Y for XYZ, M for LMS)
    pub y: f32,
    /// Z component (B for RGB, Z for XYZ, S for LMS)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if all components are strictly greater than zero.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.x > 0.0 && self.y > 0.0 && self.z > 0.0
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Vec3 / Vec3 (component-wise)
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_componentwise_division() {
        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(4.0, 6.0, 8.0);
        assert_eq!(b / a, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(a * (b / a), b);
    }

    #[test]
    fn test_vec3_positive() {
        assert!(Vec3::new(0.95, 1.0, 1.08).is_positive());
        assert!(!Vec3::new(0.95, 0.0, 1.08).is_positive());
        assert!(!Vec3::new(f32::NAN, 1.0, 1.0).is_positive());
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.map(|v| v * v), Vec3::new(1.0, 4.0, 9.0));
        assert_eq!(Vec3::from_array(b.to_array()), b);
    }
}

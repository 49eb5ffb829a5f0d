//! Chromatic adaptation strategies.
//!
//! A strategy re-expresses an XYZ color seen under one reference white as
//! the corresponding color under another. The converter calls it at most
//! once per conversion.
//!
//! # Example
//!
//! ```rust
//! use chroma_convert::{ChromaticAdaptation, VonKriesAdaptation};
//! use chroma_core::{illuminant, CieXyz};
//!
//! let cat = VonKriesAdaptation::bradford();
//! let white = cat.adapt(illuminant::D65, illuminant::D65, illuminant::D50);
//! assert!((white.x - illuminant::D50.x).abs() < 1e-4);
//! ```

use std::fmt::Debug;

use chroma_core::CieXyz;
use chroma_math::{von_kries_scale, Mat3, Vec3};
use tracing::debug;

use crate::converters::CieXyzAndLmsConverter;
use crate::error::{ColorError, ColorResult};

/// Adapts XYZ colors between reference whites.
///
/// Implementations must return `color` unchanged when the two whites are
/// equal, and must not clamp.
pub trait ChromaticAdaptation: Send + Sync + Debug {
    /// Re-expresses `color`, relative to `source_white`, relative to
    /// `target_white`.
    fn adapt(&self, color: CieXyz, source_white: CieXyz, target_white: CieXyz) -> CieXyz;
}

/// Von Kries adaptation in a configurable cone response basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonKriesAdaptation {
    lms: CieXyzAndLmsConverter,
}

impl VonKriesAdaptation {
    /// Builds the strategy for an XYZ -> LMS matrix.
    ///
    /// # Errors
    ///
    /// [`ColorError::SingularMatrix`] when `cone` has no inverse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_convert::VonKriesAdaptation;
    /// use chroma_math::{Mat3, CAT02};
    ///
    /// assert!(VonKriesAdaptation::new(CAT02).is_ok());
    /// assert!(VonKriesAdaptation::new(Mat3::from_rows([[0.0; 3]; 3])).is_err());
    /// ```
    pub fn new(cone: Mat3) -> ColorResult<Self> {
        let lms = CieXyzAndLmsConverter::new(cone)
            .ok_or(ColorError::SingularMatrix("adaptation cone matrix"))?;
        debug!(matrix = ?cone.m, "von Kries adaptation created");
        Ok(Self { lms })
    }

    /// Bradford adaptation, the default.
    pub const fn bradford() -> Self {
        Self {
            lms: CieXyzAndLmsConverter::bradford(),
        }
    }

    /// The XYZ -> LMS matrix in use.
    #[inline]
    pub fn cone_matrix(&self) -> Mat3 {
        self.lms.matrix()
    }

    #[inline]
    fn cone(&self, xyz: CieXyz) -> Vec3 {
        Vec3::from_array(self.lms.to_lms(xyz).to_array())
    }
}

impl Default for VonKriesAdaptation {
    fn default() -> Self {
        Self::bradford()
    }
}

impl ChromaticAdaptation for VonKriesAdaptation {
    fn adapt(&self, color: CieXyz, source_white: CieXyz, target_white: CieXyz) -> CieXyz {
        if source_white == target_white {
            return color;
        }

        let scaled = von_kries_scale(
            self.cone(color),
            self.cone(source_white),
            self.cone(target_white),
        );
        let lms = chroma_core::Lms::new(scaled.x, scaled.y, scaled.z);
        self.lms.to_xyz(lms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chroma_core::illuminant;
    use chroma_math::{BRADFORD_SHARP, CAT02, CMCCAT2000, VON_KRIES_HPE, XYZ_SCALING};

    #[test]
    fn test_equal_whites_identity() {
        let cat = VonKriesAdaptation::bradford();
        let c = CieXyz::new(0.123_456, 0.654_321, 0.111_111);
        assert_eq!(cat.adapt(c, illuminant::A, illuminant::A), c);
    }

    #[test]
    fn test_white_maps_to_white() {
        for cone in [CAT02, BRADFORD_SHARP, VON_KRIES_HPE, CMCCAT2000, XYZ_SCALING] {
            let cat = VonKriesAdaptation::new(cone).unwrap();
            let w = cat.adapt(illuminant::D65, illuminant::D65, illuminant::D50);
            assert_abs_diff_eq!(w.x, illuminant::D50.x, epsilon = 1e-4);
            assert_abs_diff_eq!(w.y, illuminant::D50.y, epsilon = 1e-4);
            assert_abs_diff_eq!(w.z, illuminant::D50.z, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_bradford_reference() {
        // Lindbloom: D65 -> D50 Bradford matrix applied to (0.5, 0.4, 0.3)
        let cat = VonKriesAdaptation::bradford();
        let c = cat.adapt(CieXyz::new(0.5, 0.4, 0.3), illuminant::D65, illuminant::D50);
        let expected = [
            1.047_811 * 0.5 + 0.022_887 * 0.4 - 0.050_127 * 0.3,
            0.029_542 * 0.5 + 0.990_484 * 0.4 - 0.017_049 * 0.3,
            -0.009_234 * 0.5 + 0.015_044 * 0.4 + 0.752_132 * 0.3,
        ];
        assert_abs_diff_eq!(c.x, expected[0], epsilon = 1e-3);
        assert_abs_diff_eq!(c.y, expected[1], epsilon = 1e-3);
        assert_abs_diff_eq!(c.z, expected[2], epsilon = 1e-3);
    }

    #[test]
    fn test_reversible() {
        let cat = VonKriesAdaptation::bradford();
        let c = CieXyz::new(0.3, 0.2, 0.6);
        let there = cat.adapt(c, illuminant::D65, illuminant::A);
        let back = cat.adapt(there, illuminant::A, illuminant::D65);
        assert_abs_diff_eq!(back.x, c.x, epsilon = 1e-4);
        assert_abs_diff_eq!(back.y, c.y, epsilon = 1e-4);
        assert_abs_diff_eq!(back.z, c.z, epsilon = 1e-4);
    }

    #[test]
    fn test_singular_rejected() {
        let err = VonKriesAdaptation::new(Mat3::from_rows([[1.0, 2.0, 3.0]; 3])).unwrap_err();
        assert_eq!(err, ColorError::SingularMatrix("adaptation cone matrix"));
    }
}

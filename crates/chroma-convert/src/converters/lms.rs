//! CIE XYZ <-> LMS.

use chroma_core::{CieXyz, Lms};
use chroma_math::{Mat3, BRADFORD, BRADFORD_INV};

/// Projects XYZ into a cone response basis and back.
///
/// Holds the forward matrix and its inverse so neither direction
/// inverts at conversion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieXyzAndLmsConverter {
    to_lms: Mat3,
    to_xyz: Mat3,
}

impl CieXyzAndLmsConverter {
    /// Creates a converter for an XYZ -> LMS matrix.
    ///
    /// Returns `None` when the matrix is singular.
    pub fn new(to_lms: Mat3) -> Option<Self> {
        let to_xyz = to_lms.inverse()?;
        Some(Self { to_lms, to_xyz })
    }

    /// Bradford basis with its tabulated inverse.
    pub const fn bradford() -> Self {
        Self {
            to_lms: BRADFORD,
            to_xyz: BRADFORD_INV,
        }
    }

    /// The XYZ -> LMS matrix.
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.to_lms
    }

    /// XYZ -> LMS.
    #[inline]
    pub fn to_lms(&self, xyz: CieXyz) -> Lms {
        let v = self.to_lms * xyz.to_vec3();
        Lms::new(v.x, v.y, v.z)
    }

    /// LMS -> XYZ.
    #[inline]
    pub fn to_xyz(&self, lms: Lms) -> CieXyz {
        CieXyz::from_vec3(self.to_xyz * chroma_math::Vec3::from_array(lms.to_array()))
    }
}

impl Default for CieXyzAndLmsConverter {
    fn default() -> Self {
        Self::bradford()
    }
}

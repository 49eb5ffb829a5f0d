//! Cone response (LMS) matrices and von Kries scaling.
//!
//! Chromatic adaptation re-expresses a color as if it were seen under a
//! different reference white. The von Kries method does this in a cone
//! response basis: XYZ is projected to LMS with a 3x3 matrix, each cone
//! channel is scaled by the ratio of the target and source white responses,
//! and the result is projected back.
//!
//! # Supported Bases
//!
//! - [`BRADFORD`] - the default; best overall accuracy
//! - [`BRADFORD_SHARP`] - spectrally sharpened Bradford
//! - [`VON_KRIES_HPE`] - Hunt-Pointer-Estevez, equal-energy normalised
//! - [`VON_KRIES_HPE_ADJUSTED`] - Hunt-Pointer-Estevez, D65 normalised
//! - [`CAT02`] - from CIECAM02
//! - [`CMCCAT2000`] - from CMCCAT2000
//! - [`XYZ_SCALING`] - identity; scales XYZ directly
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{von_kries_scale, BRADFORD, BRADFORD_INV, D65, D50, Vec3};
//!
//! let lms = BRADFORD * Vec3::new(0.4, 0.35, 0.2);
//! let scaled = von_kries_scale(lms, BRADFORD * D65, BRADFORD * D50);
//! let xyz_d50 = BRADFORD_INV * scaled;
//! assert!(xyz_d50.is_finite());
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Cone Response Matrices (XYZ -> LMS)
// ============================================================================

/// Bradford cone response matrix.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Inverse Bradford matrix (LMS -> XYZ).
pub const BRADFORD_INV: Mat3 = Mat3::from_rows([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Spectrally sharpened Bradford matrix.
pub const BRADFORD_SHARP: Mat3 = Mat3::from_rows([
    [1.2694, -0.0988, -0.1706],
    [-0.8364, 1.8006, 0.0357],
    [0.0297, -0.0315, 1.0018],
]);

/// Hunt-Pointer-Estevez matrix normalised to illuminant E.
pub const VON_KRIES_HPE: Mat3 = Mat3::from_rows([
    [0.3897, 0.6890, -0.0787],
    [-0.2298, 1.1834, 0.0464],
    [0.0, 0.0, 1.0],
]);

/// Hunt-Pointer-Estevez matrix normalised to D65.
///
/// The classic von Kries cone basis.
pub const VON_KRIES_HPE_ADJUSTED: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.0, 0.0, 0.91822],
]);

/// CAT02 matrix from the CIECAM02 color appearance model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// CMCCAT2000 matrix.
pub const CMCCAT2000: Mat3 = Mat3::from_rows([
    [0.7982, 0.3389, -0.1371],
    [-0.5918, 1.5512, 0.0406],
    [0.0008, 0.0239, 0.9753],
]);

/// XYZ scaling: the cone basis is XYZ itself.
///
/// Fast but inaccurate for large white point differences.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

// ============================================================================
// Von Kries Scaling
// ============================================================================

/// Scales a cone response by the ratio of two white responses.
///
/// All three arguments must already be in the same LMS basis. The ratio
/// is taken component-wise: `color * (target_white / source_white)`.
///
/// # Example
///
/// ```rust
/// use chroma_math::{von_kries_scale, Vec3};
///
/// let white = Vec3::new(0.9, 1.1, 1.0);
/// let target = Vec3::new(1.0, 1.0, 0.8);
/// // The source white lands exactly on the target white.
/// assert_eq!(von_kries_scale(white, white, target), target);
/// ```
#[inline]
pub fn von_kries_scale(color_lms: Vec3, source_white_lms: Vec3, target_white_lms: Vec3) -> Vec3 {
    color_lms * (target_white_lms / source_white_lms)
}

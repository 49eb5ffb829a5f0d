//! CIE XYZ <-> CIE xyY.

use chroma_core::{CieXyy, CieXyz};

/// Splits XYZ into chromaticity and luminance.
///
/// When `X + Y + Z` is zero the chromaticity is undefined and `(0, 0)`
/// is returned with `Y` passed through.
///
/// ```rust
/// use chroma_convert::converters::xyz_to_xyy;
/// use chroma_core::illuminant;
///
/// let white = xyz_to_xyy(illuminant::D65);
/// assert!((white.x - 0.3127).abs() < 1e-4);
/// assert!((white.y - 0.3290).abs() < 1e-4);
/// ```
pub fn xyz_to_xyy(xyz: CieXyz) -> CieXyy {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 {
        return CieXyy::new(0.0, 0.0, xyz.y);
    }
    CieXyy::new(xyz.x / sum, xyz.y / sum, xyz.y)
}

/// Rebuilds XYZ from chromaticity and luminance.
///
/// A zero `y` chromaticity keeps the luminance: `XYZ = (0, Y, 0)`.
pub fn xyy_to_xyz(xyy: CieXyy) -> CieXyz {
    if xyy.y == 0.0 {
        return CieXyz::new(0.0, xyy.yl, 0.0);
    }
    let scale = xyy.yl / xyy.y;
    CieXyz::new(xyy.x * scale, xyy.yl, (1.0 - xyy.x - xyy.y) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sum() {
        assert_eq!(
            xyz_to_xyy(CieXyz::new(0.0, 0.0, 0.0)),
            CieXyy::new(0.0, 0.0, 0.0)
        );
        // Negative components can cancel out without Y being zero.
        assert_eq!(
            xyz_to_xyy(CieXyz::new(-0.5, 0.25, 0.25)),
            CieXyy::new(0.0, 0.0, 0.25)
        );
    }

    #[test]
    fn test_zero_y_chromaticity() {
        assert_eq!(
            xyy_to_xyz(CieXyy::new(0.3, 0.0, 0.7)),
            CieXyz::new(0.0, 0.7, 0.0)
        );
    }

    #[test]
    fn test_roundtrip() {
        let xyz = CieXyz::new(0.18, 0.2, 0.31);
        let back = xyy_to_xyz(xyz_to_xyy(xyz));
        assert!((back.x - xyz.x).abs() < 1e-6);
        assert_eq!(back.y, xyz.y);
        assert!((back.z - xyz.z).abs() < 1e-6);
    }
}

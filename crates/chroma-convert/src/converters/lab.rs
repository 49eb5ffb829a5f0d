//! CIE XYZ <-> CIE L\*a\*b\*.
//!
//! # Formula
//!
//! ```text
//! f(t) = cbrt(t)              if t > ε
//!        (κ t + 16) / 116     otherwise
//!
//! L = 116 f(Y/Yw) - 16
//! a = 500 (f(X/Xw) - f(Y/Yw))
//! b = 200 (f(Y/Yw) - f(Z/Zw))
//! ```
//!
//! # Reference
//!
//! CIE 15:2004, using the exact rational ε and κ.

use chroma_core::cie::{EPSILON, KAPPA};
use chroma_core::{CieLab, CieXyz};

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Converts XYZ to Lab relative to `white`.
///
/// The XYZ value must already be relative to `white`; no adaptation
/// happens here.
///
/// # Example
///
/// ```rust
/// use chroma_convert::converters::xyz_to_lab;
/// use chroma_core::illuminant;
///
/// let lab = xyz_to_lab(illuminant::D50, illuminant::D50);
/// assert!((lab.l - 100.0).abs() < 1e-4);
/// assert!(lab.a.abs() < 1e-4 && lab.b.abs() < 1e-4);
/// ```
pub fn xyz_to_lab(xyz: CieXyz, white: CieXyz) -> CieLab {
    let fx = f(xyz.x / white.x);
    let fy = f(xyz.y / white.y);
    let fz = f(xyz.z / white.z);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    CieLab::with_white_point(l, a, b, white)
}

/// Converts Lab to XYZ relative to the Lab value's own white point.
pub fn lab_to_xyz(lab: CieLab) -> CieXyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let fx3 = fx * fx * fx;
    let fz3 = fz * fz * fz;

    let xr = if fx3 > EPSILON {
        fx3
    } else {
        (116.0 * fx - 16.0) / KAPPA
    };
    let yr = if lab.l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        lab.l / KAPPA
    };
    let zr = if fz3 > EPSILON {
        fz3
    } else {
        (116.0 * fz - 16.0) / KAPPA
    };

    let w = lab.white_point;
    CieXyz::new(xr * w.x, yr * w.y, zr * w.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chroma_core::illuminant;

    #[test]
    fn test_black() {
        let lab = xyz_to_lab(CieXyz::new(0.0, 0.0, 0.0), illuminant::D50);
        assert_abs_diff_eq!(lab.l, 0.0, epsilon = 1e-4);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);
    }

    #[test]
    fn test_reference_value() {
        // XYZ (D50) of sRGB red adapted by Bradford
        let xyz = CieXyz::new(0.436075, 0.222504, 0.013932);
        let lab = xyz_to_lab(xyz, illuminant::D50);
        assert_abs_diff_eq!(lab.l, 54.2917, epsilon = 1e-2);
        assert_abs_diff_eq!(lab.a, 80.8125, epsilon = 1e-2);
        assert_abs_diff_eq!(lab.b, 69.8851, epsilon = 1e-2);
    }

    #[test]
    fn test_roundtrip_both_segments() {
        for xyz in [
            CieXyz::new(0.5, 0.4, 0.3),
            CieXyz::new(0.004, 0.003, 0.006),
        ] {
            let back = lab_to_xyz(xyz_to_lab(xyz, illuminant::D65));
            assert_abs_diff_eq!(back.x, xyz.x, epsilon = 1e-5);
            assert_abs_diff_eq!(back.y, xyz.y, epsilon = 1e-5);
            assert_abs_diff_eq!(back.z, xyz.z, epsilon = 1e-5);
        }
    }
}

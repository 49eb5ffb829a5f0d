//! CIE XYZ <-> Hunter Lab.
//!
//! # Formula
//!
//! ```text
//! Ka = 100 * (175 / 198.04) * (Xw + Yw)
//! Kb = 100 * ( 70 / 218.11) * (Yw + Zw)
//!
//! L = 100 sqrt(Y/Yw)
//! a = Ka (X/Xw - Y/Yw) / sqrt(Y/Yw)
//! b = Kb (Y/Yw - Z/Zw) / sqrt(Y/Yw)
//! ```
//!
//! Under illuminant C the coefficients are exactly 175 and 70.

use chroma_core::{illuminant, CieXyz, HunterLab};

/// Chromaticity coefficients `(Ka, Kb)` for a white point.
#[inline]
fn coefficients(white: CieXyz) -> (f32, f32) {
    if white == illuminant::C {
        return (175.0, 70.0);
    }
    let ka = 100.0 * (175.0 / 198.04) * (white.x + white.y);
    let kb = 100.0 * (70.0 / 218.11) * (white.y + white.z);
    (ka, kb)
}

/// Converts XYZ to Hunter Lab relative to `white`.
///
/// Zero luminance gives `a = b = 0`.
pub fn xyz_to_hunter_lab(xyz: CieXyz, white: CieXyz) -> HunterLab {
    let (ka, kb) = coefficients(white);

    let yr = xyz.y / white.y;
    let sqrt_y = yr.sqrt();
    let l = 100.0 * sqrt_y;

    let (a, b) = if sqrt_y == 0.0 {
        (0.0, 0.0)
    } else {
        (
            ka * (xyz.x / white.x - yr) / sqrt_y,
            kb * (yr - xyz.z / white.z) / sqrt_y,
        )
    };

    HunterLab::with_white_point(l, a, b, white)
}

/// Converts Hunter Lab to XYZ relative to the value's own white point.
pub fn hunter_lab_to_xyz(hunter: HunterLab) -> CieXyz {
    let white = hunter.white_point;
    let (ka, kb) = coefficients(white);

    let yr = (hunter.l / 100.0) * (hunter.l / 100.0);
    let sqrt_y = yr.sqrt();

    let x = ((hunter.a / ka) * sqrt_y + yr) * white.x;
    let y = yr * white.y;
    let z = -((hunter.b / kb) * sqrt_y - yr) * white.z;

    CieXyz::new(x, y, z)
}

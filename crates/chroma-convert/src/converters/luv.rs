//! CIE XYZ <-> CIE L\*u\*v\*.

use chroma_core::cie::{EPSILON, KAPPA};
use chroma_core::{CieLuv, CieXyz};

/// `(u', v')` chromaticity; `None` when `X + 15Y + 3Z` is zero.
#[inline]
fn uv_prime(xyz: CieXyz) -> Option<(f32, f32)> {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom == 0.0 {
        None
    } else {
        Some((4.0 * xyz.x / denom, 9.0 * xyz.y / denom))
    }
}

/// Converts XYZ to Luv relative to `white`.
///
/// ```rust
/// use chroma_convert::converters::xyz_to_luv;
/// use chroma_core::{CieXyz, illuminant};
///
/// let black = xyz_to_luv(CieXyz::new(0.0, 0.0, 0.0), illuminant::D65);
/// assert_eq!((black.l, black.u, black.v), (0.0, 0.0, 0.0));
/// ```
pub fn xyz_to_luv(xyz: CieXyz, white: CieXyz) -> CieLuv {
    let yr = xyz.y / white.y;
    let (upw, vpw) = uv_prime(white).unwrap_or((0.0, 0.0));

    let l = if yr > EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        KAPPA * yr
    };

    let (u, v) = match uv_prime(xyz) {
        Some((up, vp)) => (13.0 * l * (up - upw), 13.0 * l * (vp - vpw)),
        None => (0.0, 0.0),
    };

    CieLuv::with_white_point(l, u, v, white)
}

/// Converts Luv to XYZ relative to the Luv value's own white point.
///
/// `L = 0` is black regardless of `u` and `v`.
pub fn luv_to_xyz(luv: CieLuv) -> CieXyz {
    let l = luv.l;
    if l == 0.0 {
        return CieXyz::new(0.0, 0.0, 0.0);
    }

    let white = luv.white_point;
    let (u0, v0) = uv_prime(white).unwrap_or((0.0, 0.0));

    let yr = if l > KAPPA * EPSILON {
        let t = (l + 16.0) / 116.0;
        t * t * t
    } else {
        l / KAPPA
    };
    let y = yr * white.y;

    let a = (52.0 * l / (luv.u + 13.0 * l * u0) - 1.0) / 3.0;
    let b = -5.0 * y;
    let c = -1.0 / 3.0;
    let d = y * (39.0 * l / (luv.v + 13.0 * l * v0) - 5.0);

    let x = (d - b) / (a - c);
    let z = x * a + b;

    CieXyz::new(x, y, z)
}

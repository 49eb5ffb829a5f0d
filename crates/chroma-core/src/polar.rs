//! Cartesian <-> cylindrical helpers for the LCh forms.

/// `(a, b)` to `(chroma, hue)`. Hue is in degrees, wrapped into [0, 360).
#[inline]
pub(crate) fn to_polar(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    (c, h)
}

/// `(chroma, hue in degrees)` to `(a, b)`.
#[inline]
pub(crate) fn from_polar(c: f32, h: f32) -> (f32, f32) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_quadrants() {
        assert!((to_polar(1.0, 0.0).1 - 0.0).abs() < 1e-4);
        assert!((to_polar(0.0, 1.0).1 - 90.0).abs() < 1e-4);
        assert!((to_polar(-1.0, 0.0).1 - 180.0).abs() < 1e-4);
        assert!((to_polar(0.0, -1.0).1 - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_negative_hue_wrapped() {
        let (_, h) = to_polar(1.0, -0.001);
        assert!(h > 359.0 && h < 360.0);
    }

    #[test]
    fn test_roundtrip() {
        let (c, h) = to_polar(-23.5, 41.25);
        let (a, b) = from_polar(c, h);
        assert!((a + 23.5).abs() < 1e-3);
        assert!((b - 41.25).abs() < 1e-3);
    }
}

//! Companded RGB <-> HSL, HSV, CMYK and YCbCr.
//!
//! These only reshuffle channels. The `*_to_rgb` functions take the
//! working space the result should be labelled with; the forward
//! direction ignores the working space. Nothing is clamped.

use chroma_core::{Cmyk, Hsl, Hsv, Rgb, RgbWorkingSpace, YCbCr};

/// Hue in degrees from channels and their extremes, shared by HSL and HSV.
#[inline]
fn hue(r: f32, g: f32, b: f32, max: f32, chroma: f32) -> f32 {
    let sector = if r == max {
        (g - b) / chroma
    } else if g == max {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    let h = sector * 60.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ============================================================================
// HSL
// ============================================================================

/// RGB -> HSL. An achromatic input has `h = s = 0`.
///
/// ```rust
/// use chroma_convert::converters::rgb_to_hsl;
/// use chroma_core::Rgb;
///
/// let hsl = rgb_to_hsl(Rgb::new(0.0, 1.0, 0.0));
/// assert_eq!((hsl.h, hsl.s, hsl.l), (120.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = (rgb.r, rgb.g, rgb.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let l = (max + min) / 2.0;

    if chroma.abs() < f32::EPSILON {
        return Hsl::new(0.0, 0.0, l);
    }

    let h = hue(r, g, b, max, chroma);
    let s = if l <= 0.5 {
        chroma / (max + min)
    } else {
        chroma / (2.0 - max - min)
    };

    Hsl::new(h, s, l)
}

/// One channel of the HSL -> RGB reconstruction.
#[inline]
fn hsl_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL -> RGB in `working_space`.
pub fn hsl_to_rgb(hsl: Hsl, working_space: RgbWorkingSpace) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s.abs() < f32::EPSILON {
        return Rgb::with_working_space(l, l, l, working_space);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hk = h.rem_euclid(360.0) / 360.0;

    Rgb::with_working_space(
        hsl_channel(p, q, hk + 1.0 / 3.0),
        hsl_channel(p, q, hk),
        hsl_channel(p, q, hk - 1.0 / 3.0),
        working_space,
    )
}

// ============================================================================
// HSV
// ============================================================================

/// RGB -> HSV. An achromatic input has `h = s = 0`.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = (rgb.r, rgb.g, rgb.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    if chroma.abs() < f32::EPSILON {
        return Hsv::new(0.0, 0.0, max);
    }

    Hsv::new(hue(r, g, b, max, chroma), chroma / max, max)
}

/// HSV -> RGB in `working_space`.
pub fn hsv_to_rgb(hsv: Hsv, working_space: RgbWorkingSpace) -> Rgb {
    let Hsv { h, s, v } = hsv;

    if s.abs() < f32::EPSILON {
        return Rgb::with_working_space(v, v, v, working_space);
    }

    let sector = h.rem_euclid(360.0) / 60.0;
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::with_working_space(r, g, b, working_space)
}

// ============================================================================
// CMYK
// ============================================================================

/// RGB -> CMYK. Pure black is `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let k = (1.0 - rgb.r).min(1.0 - rgb.g).min(1.0 - rgb.b);

    if (1.0 - k).abs() < f32::EPSILON {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }

    let inv = 1.0 - k;
    Cmyk::new(
        (1.0 - rgb.r - k) / inv,
        (1.0 - rgb.g - k) / inv,
        (1.0 - rgb.b - k) / inv,
        k,
    )
}

/// CMYK -> RGB in `working_space`.
pub fn cmyk_to_rgb(cmyk: Cmyk, working_space: RgbWorkingSpace) -> Rgb {
    let inv_k = 1.0 - cmyk.k;
    Rgb::with_working_space(
        (1.0 - cmyk.c) * inv_k,
        (1.0 - cmyk.m) * inv_k,
        (1.0 - cmyk.y) * inv_k,
        working_space,
    )
}

// ============================================================================
// YCbCr (JFIF, full range)
// ============================================================================

/// RGB -> YCbCr on the 0..255 scale.
///
/// ```rust
/// use chroma_convert::converters::rgb_to_ycbcr;
/// use chroma_core::Rgb;
///
/// let white = rgb_to_ycbcr(Rgb::new(1.0, 1.0, 1.0));
/// assert!((white.y - 255.0).abs() < 1e-3);
/// assert!((white.cb - 128.0).abs() < 1e-3);
/// ```
pub fn rgb_to_ycbcr(rgb: Rgb) -> YCbCr {
    let r = rgb.r * 255.0;
    let g = rgb.g * 255.0;
    let b = rgb.b * 255.0;

    YCbCr::new(
        0.299 * r + 0.587 * g + 0.114 * b,
        128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
        128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
    )
}

/// YCbCr -> RGB in `working_space`. Out-of-gamut results are not clamped.
pub fn ycbcr_to_rgb(ycbcr: YCbCr, working_space: RgbWorkingSpace) -> Rgb {
    let y = ycbcr.y;
    let cb = ycbcr.cb - 128.0;
    let cr = ycbcr.cr - 128.0;

    let r = y + 1.402 * cr;
    let g = y - 0.344136 * cb - 0.714136 * cr;
    let b = y + 1.772 * cb;

    Rgb::with_working_space(r / 255.0, g / 255.0, b / 255.0, working_space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chroma_primaries::SRGB;

    const SAMPLES: [Rgb; 6] = [
        Rgb::new(1.0, 0.0, 0.0),
        Rgb::new(0.2, 0.7, 0.4),
        Rgb::new(0.9, 0.85, 0.1),
        Rgb::new(0.3, 0.1, 0.8),
        Rgb::new(0.6, 0.2, 0.5),
        Rgb::new(0.05, 0.05, 0.9),
    ];

    #[test]
    fn test_hsl_roundtrip() {
        for rgb in SAMPLES {
            assert_abs_diff_eq!(hsl_to_rgb(rgb_to_hsl(rgb), SRGB), rgb, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_hsv_roundtrip() {
        for rgb in SAMPLES {
            assert_abs_diff_eq!(hsv_to_rgb(rgb_to_hsv(rgb), SRGB), rgb, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_hue_wraps_any_turn() {
        for (outside, inside) in [(800.0, 80.0), (-40.0, 320.0), (360.0, 0.0)] {
            assert_eq!(
                hsl_to_rgb(Hsl::new(outside, 1.0, 0.5), SRGB),
                hsl_to_rgb(Hsl::new(inside, 1.0, 0.5), SRGB)
            );
            assert_eq!(
                hsv_to_rgb(Hsv::new(outside, 0.8, 0.9), SRGB),
                hsv_to_rgb(Hsv::new(inside, 0.8, 0.9), SRGB)
            );
        }
        assert_abs_diff_eq!(
            hsl_to_rgb(Hsl::new(800.0, 1.0, 0.5), SRGB),
            Rgb::new(2.0 / 3.0, 1.0, 0.0),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            hsv_to_rgb(Hsv::new(-120.0, 1.0, 1.0), SRGB),
            Rgb::new(0.0, 0.0, 1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_cmyk_roundtrip() {
        for rgb in SAMPLES {
            assert_abs_diff_eq!(cmyk_to_rgb(rgb_to_cmyk(rgb), SRGB), rgb, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_ycbcr_roundtrip() {
        for rgb in SAMPLES {
            assert_abs_diff_eq!(ycbcr_to_rgb(rgb_to_ycbcr(rgb), SRGB), rgb, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_grey_is_achromatic() {
        let grey = Rgb::from_u8(128, 128, 128);
        let hsl = rgb_to_hsl(grey);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl_to_rgb(hsl, SRGB), grey);

        let hsv = rgb_to_hsv(grey);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv_to_rgb(hsv, SRGB), grey);
    }

    #[test]
    fn test_black_cmyk() {
        assert_eq!(rgb_to_cmyk(Rgb::new(0.0, 0.0, 0.0)), Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(cmyk_to_rgb(Cmyk::new(0.0, 0.0, 0.0, 1.0), SRGB), Rgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_ycbcr_not_clamped() {
        let rgb = ycbcr_to_rgb(YCbCr::new(255.0, 255.0, 255.0), SRGB);
        assert!(rgb.r > 1.0);
        assert!(rgb.b > 1.0);
    }
}

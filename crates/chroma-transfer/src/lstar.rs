//! L* companding.
//!
//! Encodes linear light with the CIE lightness curve scaled to [0, 1],
//! so equal code steps are roughly equal perceptual steps. Used by
//! eciRGB v2.

/// CIE ε: 216 / 24389.
const EPSILON: f32 = 216.0 / 24389.0;

/// CIE κ: 24389 / 27.
const KAPPA: f32 = 24389.0 / 27.0;

/// Expands an L* encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.08:
///     L = 100 * V / κ
/// else:
///     L = ((V + 0.16) / 1.16)^3
/// ```
#[inline]
pub fn expand(v: f32) -> f32 {
    if v <= 0.08 {
        100.0 * v / KAPPA
    } else {
        let t = (v + 0.16) / 1.16;
        t * t * t
    }
}

/// Compresses linear light to an L* encoded value.
///
/// # Formula
///
/// ```text
/// if L <= ε:
///     V = L * κ / 100
/// else:
///     V = 1.16 * cbrt(L) - 0.16
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::lstar::compress;
///
/// // 18% grey sits just under half way in L*.
/// assert!((compress(0.18) - 0.4950).abs() < 1e-3);
/// ```
#[inline]
pub fn compress(l: f32) -> f32 {
    if l <= EPSILON {
        l * KAPPA / 100.0
    } else {
        1.16 * l.cbrt() - 0.16
    }
}

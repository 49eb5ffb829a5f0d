//! Rec.2020 (BT.2020) companding.
//!
//! Same shape as Rec.709 with the higher-precision constants the 12-bit
//! system specifies.
//!
//! # Reference
//!
//! ITU-R BT.2020-2

/// α constant.
pub const ALPHA: f32 = 1.099_296_8;

/// β constant (linear break point).
pub const BETA: f32 = 0.018_053_97;

/// Compresses linear light to Rec.2020.
///
/// # Formula
///
/// ```text
/// if L < β:
///     V = 4.5 * L
/// else:
///     V = α * L^0.45 - (α - 1)
/// ```
#[inline]
pub fn compress(l: f32) -> f32 {
    if l < BETA {
        4.5 * l
    } else {
        ALPHA * l.powf(0.45) - (ALPHA - 1.0)
    }
}

/// Expands Rec.2020 to linear light.
#[inline]
pub fn expand(v: f32) -> f32 {
    if v < 4.5 * BETA {
        v / 4.5
    } else {
        ((v + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = compress(expand(v));
            assert!((v - back).abs() < 1e-4, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_unit_maps_to_unit() {
        assert!((compress(1.0) - 1.0).abs() < 1e-6);
        assert!((expand(1.0) - 1.0).abs() < 1e-5);
    }
}
